//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions,
//! in the Hoare style `{P} action {Q}`.

use crate::error::MoveError;
use crate::game::Game;
use crate::invariants::{GameInvariants, InvariantSet};
use crate::Coord;
use tracing::instrument;

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// Preconditions and postconditions for a state transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game has not ended.
pub struct GameIsRunning;

impl GameIsRunning {
    /// Fails with [`MoveError::GameOver`] once the game has ended.
    #[instrument(skip(game))]
    pub fn check(game: &Game) -> Result<(), MoveError> {
        if game.is_running() {
            Ok(())
        } else {
            Err(MoveError::GameOver)
        }
    }
}

/// Precondition: the coordinate lies on the board.
pub struct CellOnBoard;

impl CellOnBoard {
    /// Fails with [`MoveError::InvalidPosition`] for an off-board coordinate.
    #[instrument(skip(game))]
    pub fn check(coord: &Coord, game: &Game) -> Result<(), MoveError> {
        if game.board().is_valid_cell(coord.row, coord.col) {
            Ok(())
        } else {
            Err(MoveError::InvalidPosition {
                row: coord.row,
                col: coord.col,
                size: game.board().size(),
            })
        }
    }
}

/// Precondition: the cell holds no mark.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Fails with [`MoveError::CellOccupied`] for an occupied cell.
    #[instrument(skip(game))]
    pub fn check(coord: &Coord, game: &Game) -> Result<(), MoveError> {
        if game.board().is_cell_empty(coord.row, coord.col) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied {
                row: coord.row,
                col: coord.col,
            })
        }
    }
}

/// Composite precondition, checked in order: running, on board, empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(game))]
    pub fn check(coord: &Coord, game: &Game) -> Result<(), MoveError> {
        GameIsRunning::check(game)?;
        CellOnBoard::check(coord, game)?;
        CellIsEmpty::check(coord, game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for a move by the active player.
///
/// Postconditions:
/// - board remains monotonic
/// - marks still alternate
/// - history remains consistent with board
pub struct MoveContract;

impl Contract<Game, Coord> for MoveContract {
    fn pre(game: &Game, coord: &Coord) -> Result<(), MoveError> {
        LegalMove::check(coord, game)
    }

    fn post(_before: &Game, after: &Game) -> Result<(), MoveError> {
        GameInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
