//! Core types: players, civilisations, actions, the draft script and the
//! draft aggregate itself.

pub mod action;
pub mod civilisation;
pub mod draft;
pub mod event;
pub mod player;
pub mod preset;
pub mod turn;

pub use action::{Action, ActionType, Exclusivity};
pub use civilisation::{Civilisation, GameVersion};
pub use draft::Draft;
pub use event::{AdminEvent, DraftEvent, PlayerEvent, RawDraftEvent, UnclassifiableEvent};
pub use player::Player;
pub use preset::Preset;
pub use turn::Turn;
