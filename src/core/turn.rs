//! A single scheduled slot: which player acts, and how.

use serde::{Deserialize, Serialize};

use super::action::Action;
use super::player::Player;

/// One slot of the draft script.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Turn {
    pub player: Player,
    pub action: Action,
}

impl Turn {
    /// Create a scheduled turn.
    #[must_use]
    pub const fn new(player: Player, action: Action) -> Self {
        Self { player, action }
    }

    /// Whether the civilisation chosen in this turn is concealed until
    /// reveal.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.action.is_hidden()
    }
}
