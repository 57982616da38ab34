//! Player identity.

use crate::Mark;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A participant in a game: identity plus the mark they place.
///
/// Immutable after construction. Two players in one game must hold
/// different marks; that is checked when the game is set up.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    id: String,
    name: String,
    mark: Mark,
}

impl Player {
    /// Creates a new player.
    #[instrument(skip(id, name), fields(id = %id.as_ref(), name = %name.as_ref()))]
    pub fn new(id: impl AsRef<str>, name: impl AsRef<str>, mark: Mark) -> Self {
        Self {
            id: id.as_ref().to_string(),
            name: name.as_ref().to_string(),
            mark,
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The mark this player places.
    pub fn mark(&self) -> Mark {
        self.mark
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.mark)
    }
}
