//! Draft events: the records the append-only log is made of.
//!
//! Internally an event is an explicit tagged union, [`DraftEvent`]. The
//! client wire format is older than that: it discriminates the two shapes
//! structurally, by whether a `civilisation` field is present. That
//! contract is kept at the boundary only - [`RawDraftEvent`] deserialises
//! whatever arrived and [`DraftEvent::try_from`] classifies it, so an
//! unclassifiable payload is rejected explicitly instead of defaulting to
//! either shape.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::action::{Action, ActionType};
use super::civilisation::Civilisation;
use super::player::Player;

/// A concrete move by a player against a civilisation.
///
/// Only the coarse [`ActionType`] is recorded; the modifiers of the move
/// are those of the preset turn the event was accepted for.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerEvent {
    pub player: Player,
    pub action_type: ActionType,
    pub civilisation: Civilisation,
}

impl PlayerEvent {
    /// Create a player event.
    #[must_use]
    pub fn new(player: Player, action_type: ActionType, civilisation: Civilisation) -> Self {
        Self {
            player,
            action_type,
            civilisation,
        }
    }
}

/// An administrative correction record with no associated civilisation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminEvent {
    pub player: Player,
    pub action: Action,
}

impl AdminEvent {
    /// Create an admin event.
    #[must_use]
    pub fn new(player: Player, action: Action) -> Self {
        Self { player, action }
    }
}

/// One record of the draft's append-only event log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DraftEvent {
    Player(PlayerEvent),
    Admin(AdminEvent),
}

impl DraftEvent {
    /// Shorthand for a player event record.
    #[must_use]
    pub fn player(player: Player, action_type: ActionType, civilisation: Civilisation) -> Self {
        DraftEvent::Player(PlayerEvent::new(player, action_type, civilisation))
    }

    /// Shorthand for an admin event record.
    #[must_use]
    pub fn admin(player: Player, action: Action) -> Self {
        DraftEvent::Admin(AdminEvent::new(player, action))
    }

    /// The acting player of the event, whichever shape it has.
    #[must_use]
    pub fn acting_player(&self) -> Player {
        match self {
            DraftEvent::Player(e) => e.player,
            DraftEvent::Admin(e) => e.player,
        }
    }

    /// The player event inside, if this is one.
    #[must_use]
    pub fn as_player_event(&self) -> Option<&PlayerEvent> {
        match self {
            DraftEvent::Player(e) => Some(e),
            DraftEvent::Admin(_) => None,
        }
    }

    /// A copy safe to broadcast to parties not yet entitled to the real
    /// civilisation: player events get the placeholder for their action
    /// type, admin events carry nothing to conceal.
    ///
    /// Validation never sees redacted events; redaction is applied after
    /// acceptance, on the way out.
    #[must_use]
    pub fn redacted(&self) -> DraftEvent {
        match self {
            DraftEvent::Player(e) => DraftEvent::player(
                e.player,
                e.action_type,
                Civilisation::hidden_placeholder(e.action_type),
            ),
            DraftEvent::Admin(e) => DraftEvent::Admin(e.clone()),
        }
    }
}

impl From<PlayerEvent> for DraftEvent {
    fn from(event: PlayerEvent) -> Self {
        DraftEvent::Player(event)
    }
}

impl From<AdminEvent> for DraftEvent {
    fn from(event: AdminEvent) -> Self {
        DraftEvent::Admin(event)
    }
}

/// The raw payload matched neither the player nor the admin event shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("event matches neither the player nor the admin shape")]
pub struct UnclassifiableEvent;

/// An event as it arrives off the wire, before classification.
///
/// All fields beyond `player` are optional; which ones are present decides
/// the shape. `civilisation` plus `action_type` make a player event, a lone
/// `action` makes an admin event, anything else is unclassifiable.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDraftEvent {
    pub player: Player,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action_type: Option<ActionType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub civilisation: Option<Civilisation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

impl TryFrom<RawDraftEvent> for DraftEvent {
    type Error = UnclassifiableEvent;

    fn try_from(raw: RawDraftEvent) -> Result<Self, Self::Error> {
        match raw {
            RawDraftEvent {
                player,
                action_type: Some(action_type),
                civilisation: Some(civilisation),
                action: None,
            } => Ok(DraftEvent::player(player, action_type, civilisation)),
            RawDraftEvent {
                player,
                action_type: None,
                civilisation: None,
                action: Some(action),
            } => Ok(DraftEvent::admin(player, action)),
            _ => Err(UnclassifiableEvent),
        }
    }
}
