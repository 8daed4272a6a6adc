//! The rule table and the orchestrator that runs it.

pub mod engine;
pub mod validation;

pub use engine::{submit, submit_raw, validate, DraftError};
pub use validation::{Validation, ValidationId};
