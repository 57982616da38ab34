//! Tic-tac-toe engine on an N×N board.
//!
//! # Architecture
//!
//! - **Board**: owns the grid, position validity, occupancy and the single
//!   placement entry point
//! - **Rules**: pure win and draw detection over a board
//! - **Player**: immutable identity plus assigned mark
//! - **Game**: setup validation, turn order and the `Running → Ended` state
//!   machine, guarded by move contracts and invariants
//!
//! # Example
//!
//! ```
//! use lld_tictactoe::{Board, GameSetup, Mark, Outcome, Player, Transition};
//!
//! let setup = GameSetup::new(
//!     Board::default(),
//!     Player::new("1", "hemant", Mark::X),
//!     Player::new("2", "vasant", Mark::O),
//! )?;
//! let mut game = setup.start_game();
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     game.play_move(row, col)?;
//! }
//! assert_eq!(game.play_move(0, 2)?, Transition::Won(Mark::X));
//! assert_eq!(game.outcome(), Some(&Outcome::Winner(Mark::X)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod contracts;
mod error;
mod game;
mod invariants;
mod player;
pub mod rules;
mod types;

// Crate-level exports - Domain types
pub use types::{Cell, Coord, GameStatus, Mark, Outcome, ParseCoordError};

// Crate-level exports - Board and players
pub use board::{Board, DEFAULT_SIZE};
pub use player::Player;

// Crate-level exports - Game engine
pub use action::{Move, Transition};
pub use game::{Game, GameSetup};

// Crate-level exports - Errors
pub use error::{MoveError, PlaceError, SetupError};

// Crate-level exports - Contracts and invariants
pub use contracts::{CellIsEmpty, CellOnBoard, Contract, GameIsRunning, LegalMove, MoveContract};
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
