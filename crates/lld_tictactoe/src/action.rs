//! First-class move and transition types.
//!
//! Moves are domain events, not side effects. The game records each
//! successful placement as a [`Move`] and answers every accepted move with a
//! [`Transition`].

use crate::{Coord, Mark};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A successful placement: a mark put at a coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The mark that was placed.
    pub mark: Mark,
    /// Where it was placed.
    pub coord: Coord,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.mark, self.coord)
    }
}

/// What an accepted move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Game continues; `next` is the mark of the player now to move.
    Continue {
        /// Mark of the new active player.
        next: Mark,
    },
    /// The mover completed a line. Terminal.
    Won(Mark),
    /// The board filled without a line. Terminal.
    Draw,
}

impl Transition {
    /// Returns true if the move ended the game.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Transition::Continue { .. })
    }
}
