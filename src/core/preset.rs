//! The draft script: a fixed, ordered sequence of scheduled turns.
//!
//! A preset is agreed before play starts and never mutated by the engine.
//! Its length is the draft's total action count; the turn at index `i`
//! supplies the modifiers (exclusivity, visibility) of the event accepted
//! at index `i`.

use serde::{Deserialize, Serialize};

use super::turn::Turn;

/// The pre-agreed draft script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    name: String,
    turns: Vec<Turn>,
}

impl Preset {
    /// Create a preset from an ordered turn sequence.
    pub fn new(name: impl Into<String>, turns: Vec<Turn>) -> Self {
        Self {
            name: name.into(),
            turns,
        }
    }

    /// Display name of the preset.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Total number of scheduled turns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.turns.len()
    }

    /// Whether the script contains no turns at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The scheduled turn at `index`, if the script extends that far.
    #[must_use]
    pub fn turn(&self, index: usize) -> Option<&Turn> {
        self.turns.get(index)
    }

    /// Iterate over the scheduled turns in order.
    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }
}
