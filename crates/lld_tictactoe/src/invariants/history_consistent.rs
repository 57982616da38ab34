//! History consistency invariant: history length matches occupied cells.

use super::Invariant;
use crate::Game;

/// Invariant: history length equals number of occupied cells.
pub struct HistoryConsistentInvariant;

impl Invariant<Game> for HistoryConsistentInvariant {
    fn holds(game: &Game) -> bool {
        game.history().len() == game.board().occupied()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
