//! The validation orchestrator: runs the rule table against a candidate
//! event and, on acceptance, performs the draft's single state transition.
//!
//! `validate` is pure and never mutates; `submit` is the atomic
//! validate-and-append. The engine assumes the caller serialises
//! concurrent candidates per draft - one in-flight validation at a time.
//! If a draft is shared across threads, a single mutex around `submit` is
//! the only exclusion needed; the derived views read but never write.

use log::debug;
use thiserror::Error;

use crate::core::draft::Draft;
use crate::core::event::{DraftEvent, RawDraftEvent, UnclassifiableEvent};

use super::validation::{Validation, ValidationId};

/// Why a candidate event was not appended.
///
/// Every variant is a normal, expected outcome to relay to the acting
/// party; nothing here is fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DraftError {
    /// A validation rule rejected the candidate.
    #[error("candidate event rejected: {0}")]
    Rejected(ValidationId),
    /// The raw payload matched neither event shape.
    #[error(transparent)]
    Unclassifiable(#[from] UnclassifiableEvent),
}

/// Run the rule table in declared order against a candidate event.
///
/// Short-circuits on the first violated rule and returns its identifier;
/// `None` means every rule passed and the candidate may be appended. The
/// table order is observable through the returned identifier and is part
/// of the contract: a candidate violating several rules is always reported
/// under the earliest one.
#[must_use]
pub fn validate(draft: &Draft, event: &DraftEvent) -> Option<ValidationId> {
    Validation::ALL
        .iter()
        .find_map(|rule| rule.apply(draft, event))
}

/// Validate a candidate event and append it on acceptance.
///
/// This is the only public door into the log: an event is either appended
/// having passed every rule, or the draft is left untouched.
pub fn submit(draft: &mut Draft, event: DraftEvent) -> Result<(), DraftError> {
    if let Some(id) = validate(draft, &event) {
        debug!(
            "rejected event for {} at action {}: {}",
            event.acting_player(),
            draft.next_action(),
            id
        );
        return Err(DraftError::Rejected(id));
    }
    debug!(
        "accepted event for {} as action {}",
        event.acting_player(),
        draft.next_action()
    );
    draft.append(event);
    Ok(())
}

/// Classify a raw wire payload and submit it.
///
/// An unclassifiable payload is rejected before any rule runs, with an
/// outcome distinct from every rule identifier.
pub fn submit_raw(draft: &mut Draft, raw: RawDraftEvent) -> Result<(), DraftError> {
    let event = DraftEvent::try_from(raw)?;
    submit(draft, event)
}
