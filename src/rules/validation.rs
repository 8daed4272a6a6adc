//! The validation rule set: ten independent, pure predicates over
//! `(Draft, DraftEvent)`, each tagged with a stable identifier.
//!
//! The identifiers are part of the wire contract with clients - they are
//! how a rejection is named to the acting party - and must never change
//! meaning between versions.
//!
//! Rules fall into two bands. The gating rules (`VLD_000`–`VLD_002`) apply
//! to every event, admin corrections included. The content rules
//! (`VLD_100`–`VLD_301`) inspect the candidate's civilisation against the
//! draft's derived views and apply to player events only; an admin event
//! passes them vacuously, as does any event when no turn is scheduled
//! (except under `VLD_000`, which exists to fail exactly then).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::action::ActionType;
use crate::core::civilisation::Civilisation;
use crate::core::draft::Draft;
use crate::core::event::{DraftEvent, PlayerEvent};

/// Stable identifier naming exactly which rule rejected a candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationId {
    #[serde(rename = "VLD_000")]
    Vld000,
    #[serde(rename = "VLD_001")]
    Vld001,
    #[serde(rename = "VLD_002")]
    Vld002,
    #[serde(rename = "VLD_100")]
    Vld100,
    #[serde(rename = "VLD_101")]
    Vld101,
    #[serde(rename = "VLD_102")]
    Vld102,
    #[serde(rename = "VLD_103")]
    Vld103,
    #[serde(rename = "VLD_200")]
    Vld200,
    #[serde(rename = "VLD_300")]
    Vld300,
    #[serde(rename = "VLD_301")]
    Vld301,
}

impl std::fmt::Display for ValidationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ValidationId::Vld000 => "VLD_000",
            ValidationId::Vld001 => "VLD_001",
            ValidationId::Vld002 => "VLD_002",
            ValidationId::Vld100 => "VLD_100",
            ValidationId::Vld101 => "VLD_101",
            ValidationId::Vld102 => "VLD_102",
            ValidationId::Vld103 => "VLD_103",
            ValidationId::Vld200 => "VLD_200",
            ValidationId::Vld300 => "VLD_300",
            ValidationId::Vld301 => "VLD_301",
        };
        write!(f, "{}", name)
    }
}

/// A tagged rule record: identifier plus predicate. `true` means the rule
/// is satisfied.
#[derive(Clone, Copy)]
pub struct Validation {
    id: ValidationId,
    check: fn(&Draft, &DraftEvent) -> bool,
}

impl Validation {
    /// The complete rule table, in evaluation order. Constructed once as
    /// constant data; the orchestrator walks it front to back, so the
    /// order decides which identifier is reported when several rules
    /// would reject.
    pub const ALL: [Validation; 10] = [
        Validation { id: ValidationId::Vld000, check: vld_000 },
        Validation { id: ValidationId::Vld001, check: vld_001 },
        Validation { id: ValidationId::Vld002, check: vld_002 },
        Validation { id: ValidationId::Vld100, check: vld_100 },
        Validation { id: ValidationId::Vld101, check: vld_101 },
        Validation { id: ValidationId::Vld102, check: vld_102 },
        Validation { id: ValidationId::Vld103, check: vld_103 },
        Validation { id: ValidationId::Vld200, check: vld_200 },
        Validation { id: ValidationId::Vld300, check: vld_300 },
        Validation { id: ValidationId::Vld301, check: vld_301 },
    ];

    /// This rule's identifier.
    #[must_use]
    pub fn id(&self) -> ValidationId {
        self.id
    }

    /// Run the rule, yielding its identifier only on violation.
    #[must_use]
    pub fn apply(&self, draft: &Draft, event: &DraftEvent) -> Option<ValidationId> {
        if (self.check)(draft, event) {
            None
        } else {
            Some(self.id)
        }
    }
}

/// The draft must have started and a scheduled turn must remain.
fn vld_000(draft: &Draft, _event: &DraftEvent) -> bool {
    draft.can_be_started() && draft.has_next_action()
}

/// The acting player must be the scheduled one.
fn vld_001(draft: &Draft, event: &DraftEvent) -> bool {
    match draft.expected_action() {
        Some(turn) => turn.player == event.acting_player(),
        None => true,
    }
}

/// A player event's category must match the scheduled action's category.
fn vld_002(draft: &Draft, event: &DraftEvent) -> bool {
    match (draft.expected_action(), event.as_player_event()) {
        (Some(turn), Some(player_event)) => {
            player_event.action_type == turn.action.action_type()
        }
        _ => true,
    }
}

/// No action may target a globally banned civilisation.
fn vld_100(draft: &Draft, event: &DraftEvent) -> bool {
    content_rule(draft, event, |draft, player_event| {
        !draft.global_bans().contains(&player_event.civilisation)
    })
}

/// A player cannot pick a civilisation they banned themselves.
fn vld_101(draft: &Draft, event: &DraftEvent) -> bool {
    content_rule(draft, event, |draft, player_event| {
        player_event.action_type != ActionType::Pick
            || !draft
                .bans_for_player(player_event.player)
                .contains(&player_event.civilisation)
    })
}

/// A player cannot repeat one of their own exclusive picks.
fn vld_102(draft: &Draft, event: &DraftEvent) -> bool {
    content_rule(draft, event, |draft, player_event| {
        player_event.action_type != ActionType::Pick
            || !draft
                .exclusive_picks(player_event.player)
                .contains(&player_event.civilisation)
    })
}

/// A globally picked civilisation is exhausted for everyone.
fn vld_103(draft: &Draft, event: &DraftEvent) -> bool {
    content_rule(draft, event, |draft, player_event| {
        player_event.action_type != ActionType::Pick
            || !draft.global_picks().contains(&player_event.civilisation)
    })
}

/// A player cannot repeat one of their own exclusive bans.
fn vld_200(draft: &Draft, event: &DraftEvent) -> bool {
    content_rule(draft, event, |draft, player_event| {
        player_event.action_type != ActionType::Ban
            || !draft
                .exclusive_bans_by_player(player_event.player)
                .contains(&player_event.civilisation)
    })
}

/// A snipe must target a civilisation the opponent actually picked.
fn vld_300(draft: &Draft, event: &DraftEvent) -> bool {
    content_rule(draft, event, |draft, player_event| {
        if player_event.action_type != ActionType::Snipe {
            return true;
        }
        match player_event.player.opponent() {
            Some(opponent) => draft
                .picks(opponent)
                .contains(&player_event.civilisation),
            None => true,
        }
    })
}

/// The whole snipe chain - the player's recorded snipes plus the
/// candidate, in order - must be satisfiable against the opponent's
/// picks, each snipe consuming one matching pick. Consumption is
/// multiset-style: a pick removed for an earlier snipe cannot satisfy a
/// later one, so sniping the same target twice fails unless the opponent
/// picked it twice.
fn vld_301(draft: &Draft, event: &DraftEvent) -> bool {
    content_rule(draft, event, |draft, player_event| {
        if player_event.action_type != ActionType::Snipe {
            return true;
        }
        let Some(opponent) = player_event.player.opponent() else {
            return true;
        };

        let mut available: FxHashMap<Civilisation, usize> = FxHashMap::default();
        for pick in draft.picks(opponent) {
            *available.entry(pick).or_insert(0) += 1;
        }

        let mut chain: SmallVec<[Civilisation; 4]> =
            SmallVec::from_vec(draft.snipes(player_event.player));
        chain.push(player_event.civilisation.clone());

        for sniped in &chain {
            match available.get_mut(sniped) {
                Some(count) if *count > 0 => *count -= 1,
                _ => return false,
            }
        }
        true
    })
}

/// Shared preamble of the content rules: pass when the schedule is
/// exhausted or the event carries no civilisation.
fn content_rule(
    draft: &Draft,
    event: &DraftEvent,
    check: impl FnOnce(&Draft, &PlayerEvent) -> bool,
) -> bool {
    if !draft.has_next_action() {
        return true;
    }
    match event.as_player_event() {
        Some(player_event) => check(draft, player_event),
        None => true,
    }
}
