//! Player identification for a two-party draft.
//!
//! A draft is contested between exactly two parties, `Host` and `Guest`.
//! `Player::None` is the acting player of administrative corrections, so
//! the event log stays uniform: every event names an acting player even
//! when no party acted.

use serde::{Deserialize, Serialize};

/// The acting party of a scheduled turn or a recorded event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Player {
    /// The party that created the draft session.
    Host,
    /// The party that joined the draft session.
    Guest,
    /// No acting party (administrative corrections).
    None,
}

impl Player {
    /// The opposing party.
    ///
    /// Returns `None` for `Player::None` - administrative records have no
    /// opponent, and the snipe rules that need one skip such events.
    #[must_use]
    pub fn opponent(self) -> Option<Player> {
        match self {
            Player::Host => Some(Player::Guest),
            Player::Guest => Some(Player::Host),
            Player::None => None,
        }
    }

    /// Whether this is one of the two contesting parties.
    #[must_use]
    pub fn is_party(self) -> bool {
        !matches!(self, Player::None)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Player::Host => "HOST",
            Player::Guest => "GUEST",
            Player::None => "NONE",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Host.opponent(), Some(Player::Guest));
        assert_eq!(Player::Guest.opponent(), Some(Player::Host));
        assert_eq!(Player::None.opponent(), None);
    }

    #[test]
    fn test_is_party() {
        assert!(Player::Host.is_party());
        assert!(Player::Guest.is_party());
        assert!(!Player::None.is_party());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(serde_json::to_string(&Player::Host).unwrap(), "\"HOST\"");
        assert_eq!(serde_json::to_string(&Player::Guest).unwrap(), "\"GUEST\"");
        assert_eq!(serde_json::to_string(&Player::None).unwrap(), "\"NONE\"");

        let parsed: Player = serde_json::from_str("\"GUEST\"").unwrap();
        assert_eq!(parsed, Player::Guest);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::Host), "HOST");
        assert_eq!(format!("{}", Player::None), "NONE");
    }
}
