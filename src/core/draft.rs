//! The draft aggregate: an immutable script plus an append-only event log.
//!
//! The log is the only state. Everything the rules read - bans, picks,
//! snipes, the global and exclusive subsets - is a pure fold over
//! `events`, recomputed on demand. Nothing is cached, so no view can ever
//! diverge from the log.
//!
//! A `PlayerEvent` records only the coarse action type. The exclusivity
//! and visibility modifiers of an accepted event are those of the preset
//! turn at the same index: event `i` was accepted for turn `i`, and
//! administrative corrections consume a slot like any other accepted
//! event. The modifier-dependent views therefore zip the log with the
//! script.
//!
//! Uses `im::Vector` for the log: cloning a draft is O(1), which keeps
//! what-if copies and session snapshots cheap.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::action::{ActionType, Exclusivity};
use super::civilisation::Civilisation;
use super::event::{DraftEvent, PlayerEvent};
use super::player::Player;
use super::preset::Preset;
use super::turn::Turn;

/// A running draft between Host and Guest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub name_host: String,
    pub name_guest: String,
    pub host_ready: bool,
    pub guest_ready: bool,
    preset: Preset,
    events: Vector<DraftEvent>,
}

impl Draft {
    /// Create a draft with an empty log. Both parties start not ready;
    /// the session collaborator flips the flags once names are set.
    #[must_use]
    pub fn new(preset: Preset) -> Self {
        Self {
            name_host: String::new(),
            name_guest: String::new(),
            host_ready: false,
            guest_ready: false,
            preset,
            events: Vector::new(),
        }
    }

    /// The script this draft follows.
    #[must_use]
    pub fn preset(&self) -> &Preset {
        &self.preset
    }

    /// The accepted events, in acceptance order.
    pub fn events(&self) -> impl Iterator<Item = &DraftEvent> {
        self.events.iter()
    }

    /// Index of the next scheduled action. Derived, never stored: it is
    /// the number of accepted events.
    #[must_use]
    pub fn next_action(&self) -> usize {
        self.events.len()
    }

    /// Whether a scheduled turn remains.
    #[must_use]
    pub fn has_next_action(&self) -> bool {
        self.next_action() < self.preset.len()
    }

    /// The turn the schedule expects next, if any remain.
    #[must_use]
    pub fn expected_action(&self) -> Option<&Turn> {
        self.preset.turn(self.next_action())
    }

    /// Whether both parties have signalled readiness.
    #[must_use]
    pub fn can_be_started(&self) -> bool {
        self.host_ready && self.guest_ready
    }

    /// Append an accepted event. Crate-internal: the only public door is
    /// the orchestrator, which validates first.
    pub(crate) fn append(&mut self, event: DraftEvent) {
        self.events.push_back(event);
    }

    /// Replace the log wholesale. Crate-internal, for trusted server-side
    /// corrections and reconnect snapshots only.
    pub(crate) fn restore_events(&mut self, events: impl IntoIterator<Item = DraftEvent>) {
        self.events = events.into_iter().collect();
    }

    // === Derived views ===

    /// Civilisations banned under a global ban variant, by anyone.
    /// A global ban applies to both parties.
    #[must_use]
    pub fn global_bans(&self) -> Vec<Civilisation> {
        self.collect(|turn, event| {
            event.action_type == ActionType::Ban
                && scheduled_exclusivity(turn) == Some(Exclusivity::Global)
        })
    }

    /// Civilisations banned by `player` under any ban variant.
    #[must_use]
    pub fn bans_for_player(&self, player: Player) -> Vec<Civilisation> {
        self.collect(|_, event| {
            event.player == player && event.action_type == ActionType::Ban
        })
    }

    /// Civilisations `player` has picked under an exclusive pick variant.
    #[must_use]
    pub fn exclusive_picks(&self, player: Player) -> Vec<Civilisation> {
        self.collect(|turn, event| {
            event.player == player
                && event.action_type == ActionType::Pick
                && scheduled_exclusivity(turn) == Some(Exclusivity::Exclusive)
        })
    }

    /// Civilisations picked under a global pick variant, by anyone.
    /// A global pick exhausts the civilisation for both parties.
    #[must_use]
    pub fn global_picks(&self) -> Vec<Civilisation> {
        self.collect(|turn, event| {
            event.action_type == ActionType::Pick
                && scheduled_exclusivity(turn) == Some(Exclusivity::Global)
        })
    }

    /// Civilisations `player` has banned under an exclusive ban variant.
    #[must_use]
    pub fn exclusive_bans_by_player(&self, player: Player) -> Vec<Civilisation> {
        self.collect(|turn, event| {
            event.player == player
                && event.action_type == ActionType::Ban
                && scheduled_exclusivity(turn) == Some(Exclusivity::Exclusive)
        })
    }

    /// All civilisations picked by `player`, any variant.
    #[must_use]
    pub fn picks(&self, player: Player) -> Vec<Civilisation> {
        self.collect(|_, event| {
            event.player == player && event.action_type == ActionType::Pick
        })
    }

    /// All civilisations `player` has sniped, in acceptance order. The
    /// order matters to the snipe-chain rule, which consumes opponent
    /// picks in exactly this sequence.
    #[must_use]
    pub fn snipes(&self, player: Player) -> Vec<Civilisation> {
        self.collect(|_, event| {
            event.player == player && event.action_type == ActionType::Snipe
        })
    }

    /// Fold the log into the civilisations of the player events a filter
    /// keeps. The filter sees the scheduled turn for the event's index;
    /// `None` only for indices beyond the script, which accepted events
    /// never reach but the views stay total over.
    fn collect<F>(&self, mut keep: F) -> Vec<Civilisation>
    where
        F: FnMut(Option<&Turn>, &PlayerEvent) -> bool,
    {
        self.events
            .iter()
            .enumerate()
            .filter_map(|(index, event)| match event {
                DraftEvent::Player(player_event) if keep(self.preset.turn(index), player_event) => {
                    Some(player_event.civilisation.clone())
                }
                _ => None,
            })
            .collect()
    }
}

fn scheduled_exclusivity(turn: Option<&Turn>) -> Option<Exclusivity> {
    turn.map(|t| t.action.exclusivity())
}
