//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board according to tic-tac-toe rules.
//! Rules are separated from board storage so the game and the contract
//! layer can share them.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{has_winning_line, winner};
