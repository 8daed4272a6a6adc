//! # civdraft
//!
//! A captains-mode draft engine: two parties, Host and Guest, work
//! through a pre-scripted sequence of pick/ban/snipe turns over a pool of
//! civilisations, producing an agreed, append-only log of accepted
//! actions.
//!
//! ## Design Principles
//!
//! 1. **The log is the state**: a draft is its preset plus its accepted
//!    events. Every view the rules read is a pure fold over the log,
//!    recomputed on demand - no counters to invalidate.
//!
//! 2. **One door in**: the only mutation is the atomic validate-and-append
//!    in [`rules::submit`]. An event either passes all ten rules or the
//!    draft is untouched.
//!
//! 3. **Stable rejection identifiers**: a rejected candidate is reported
//!    as one of ten `VLD_*` identifiers, evaluated in fixed order with
//!    short-circuit, so the reported reason is deterministic. The
//!    identifier space is wire contract.
//!
//! 4. **Redaction after acceptance**: hidden turns conceal the chosen
//!    civilisation from the other party until reveal, but validation
//!    always runs on the true value. Redaction is applied to what gets
//!    broadcast, never to what gets checked.
//!
//! ## Modules
//!
//! - `core`: players, civilisations, actions, turns, presets, events, and
//!   the `Draft` aggregate with its derived views
//! - `rules`: the validation rule table and the orchestrator
//! - `session`: names, readiness, reconnect snapshots, corrections

pub mod core;
pub mod rules;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionType, AdminEvent, Civilisation, Draft, DraftEvent, Exclusivity, GameVersion,
    Player, PlayerEvent, Preset, RawDraftEvent, Turn, UnclassifiableEvent,
};

pub use crate::rules::{submit, submit_raw, validate, DraftError, Validation, ValidationId};

pub use crate::session::{DraftSession, NameGenerator, SessionMessage, Snapshot};
