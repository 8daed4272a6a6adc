//! Session-level collaborators: names, readiness, snapshots, corrections.

pub mod names;
pub mod store;

pub use names::NameGenerator;
pub use store::{DraftSession, SessionMessage, Snapshot};
