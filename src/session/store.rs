//! Session state around a draft: names, readiness, reconnect snapshots
//! and server-side corrections.
//!
//! The transport itself is someone else's problem. This module owns the
//! boundary contracts the engine needs from it: the readiness signal that
//! gates `VLD_000`, wholesale state application on (re)connect, validated
//! submission of candidate events, and trusted log corrections.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::action::Action;
use crate::core::draft::Draft;
use crate::core::event::DraftEvent;
use crate::core::player::Player;
use crate::core::preset::Preset;
use crate::rules::engine::{submit, DraftError};

/// A message mutating session state, reducer-style.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionMessage {
    /// A party announced its display name. Naming yourself is the
    /// readiness signal: the flag for that party flips to ready.
    SetName { player: Player, name: String },
    /// Wholesale state replacement on connect or reconnect. The snapshot
    /// comes from the session authority and is applied without
    /// re-validation.
    ApplyConfig(Snapshot),
    /// A candidate event from a party. Validated; rejection leaves the
    /// session untouched.
    ActionCompleted(DraftEvent),
    /// Server-side correction: replace the log with an authoritative
    /// sequence and record the correction as an admin event. Trusted, not
    /// validated.
    SetEvents {
        events: Vec<DraftEvent>,
        player: Player,
        action: Action,
    },
}

/// Everything a reconnecting client needs to resume a session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub name_host: String,
    pub name_guest: String,
    pub host_ready: bool,
    pub guest_ready: bool,
    pub your_player: Option<Player>,
    pub events: Vec<DraftEvent>,
}

impl Snapshot {
    /// Encode for transfer.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a transferred snapshot.
    pub fn from_bytes(bytes: &[u8]) -> Result<Snapshot, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// One party's view of a running session.
#[derive(Clone, Debug)]
pub struct DraftSession {
    draft: Draft,
    who_am_i: Option<Player>,
    own_name: Option<String>,
}

impl DraftSession {
    /// Open a fresh session over the agreed script.
    #[must_use]
    pub fn new(preset: Preset) -> Self {
        Self {
            draft: Draft::new(preset),
            who_am_i: None,
            own_name: None,
        }
    }

    /// The draft under this session.
    #[must_use]
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Which party this session belongs to, once known.
    #[must_use]
    pub fn who_am_i(&self) -> Option<Player> {
        self.who_am_i
    }

    /// The display name this party goes by, once chosen.
    #[must_use]
    pub fn own_name(&self) -> Option<&str> {
        self.own_name.as_deref()
    }

    /// Set this party's display name.
    pub fn set_own_name(&mut self, name: impl Into<String>) {
        self.own_name = Some(name.into());
    }

    /// Capture the session-visible state for a reconnecting client.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            name_host: self.draft.name_host.clone(),
            name_guest: self.draft.name_guest.clone(),
            host_ready: self.draft.host_ready,
            guest_ready: self.draft.guest_ready,
            your_player: self.who_am_i,
            events: self.draft.events().cloned().collect(),
        }
    }

    /// Apply a session message.
    ///
    /// Only `ActionCompleted` can fail; every other message is applied
    /// unconditionally.
    pub fn apply(&mut self, message: SessionMessage) -> Result<(), DraftError> {
        match message {
            SessionMessage::SetName { player, name } => {
                debug!("set name for {}: {}", player, name);
                match player {
                    Player::Host => {
                        self.draft.name_host = name;
                        self.draft.host_ready = true;
                    }
                    Player::Guest => {
                        self.draft.name_guest = name;
                        self.draft.guest_ready = true;
                    }
                    Player::None => {
                        warn!("ignoring name for non-party player");
                    }
                }
                Ok(())
            }
            SessionMessage::ApplyConfig(snapshot) => {
                debug!(
                    "applying config with {} events, you are {:?}",
                    snapshot.events.len(),
                    snapshot.your_player
                );
                self.draft.name_host = snapshot.name_host;
                self.draft.name_guest = snapshot.name_guest;
                self.draft.host_ready = snapshot.host_ready;
                self.draft.guest_ready = snapshot.guest_ready;
                self.who_am_i = snapshot.your_player;
                self.draft.restore_events(snapshot.events);
                Ok(())
            }
            SessionMessage::ActionCompleted(event) => {
                submit(&mut self.draft, event)?;
                debug!("action completed, next action {}", self.draft.next_action());
                Ok(())
            }
            SessionMessage::SetEvents {
                events,
                player,
                action,
            } => {
                debug!("correcting log to {} events plus admin record", events.len());
                self.draft.restore_events(events);
                self.draft.append(DraftEvent::admin(player, action));
                Ok(())
            }
        }
    }
}
