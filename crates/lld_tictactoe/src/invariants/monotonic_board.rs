//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, Game};

/// Invariant: board cells are monotonic (never overwritten).
///
/// Replaying the move history onto an empty board of the same size must
/// succeed without touching an occupied cell and reproduce the board.
pub struct MonotonicBoardInvariant;

impl Invariant<Game> for MonotonicBoardInvariant {
    fn holds(game: &Game) -> bool {
        let Ok(mut reconstructed) = Board::new(game.board().size()) else {
            return false;
        };

        for mov in game.history() {
            if reconstructed
                .place_symbol(mov.coord.row, mov.coord.col, mov.mark)
                .is_err()
            {
                return false;
            }
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
