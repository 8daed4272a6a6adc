//! Civilisation identity and the game-version taxonomy.
//!
//! A civilisation is a value: `(name, game_version)` with structural
//! equality on both fields. The engine never compares by reference or by
//! interned id, so two independently constructed values of the same
//! civilisation are interchangeable everywhere.
//!
//! `GameVersion::Technical` marks entries that are not draftable content:
//! the hidden placeholders used for redaction and the "Random" entry. Pool
//! construction filters them out via [`Civilisation::is_technical`].

use serde::{Deserialize, Serialize};

use super::action::ActionType;

/// Release a civilisation belongs to, or `Technical` for placeholders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameVersion {
    AgeOfKings,
    TheConquerors,
    TheForgotten,
    AfricanKingdoms,
    RiseOfTheRajas,
    /// Non-playable marker: placeholders and special entries.
    Technical,
}

/// A draftable entity, or a hidden/technical placeholder standing in for one.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Civilisation {
    pub name: String,
    pub game_version: GameVersion,
}

impl Civilisation {
    /// Create a civilisation value.
    pub fn new(name: impl Into<String>, game_version: GameVersion) -> Self {
        Self {
            name: name.into(),
            game_version,
        }
    }

    /// Generic placeholder for a concealed civilisation with no known
    /// action type.
    #[must_use]
    pub fn hidden() -> Self {
        Self::new("Hidden", GameVersion::Technical)
    }

    /// Placeholder for a concealed pick.
    #[must_use]
    pub fn hidden_pick() -> Self {
        Self::new("Hidden Pick", GameVersion::Technical)
    }

    /// Placeholder for a concealed ban.
    #[must_use]
    pub fn hidden_ban() -> Self {
        Self::new("Hidden Ban", GameVersion::Technical)
    }

    /// Placeholder for a concealed snipe.
    #[must_use]
    pub fn hidden_snipe() -> Self {
        Self::new("Hidden Snipe", GameVersion::Technical)
    }

    /// The "Random" entry offered alongside real civilisations in some
    /// presets. Technical: it never participates in pick/ban pools.
    #[must_use]
    pub fn random() -> Self {
        Self::new("Random", GameVersion::Technical)
    }

    /// The placeholder shown in place of a concealed civilisation until
    /// reveal. Redaction is a presentation concern: validation always runs
    /// against the true value, and the placeholder is substituted only in
    /// what gets broadcast (see [`DraftEvent::redacted`]).
    ///
    /// [`DraftEvent::redacted`]: super::event::DraftEvent::redacted
    #[must_use]
    pub fn hidden_placeholder(action_type: ActionType) -> Self {
        match action_type {
            ActionType::Pick => Self::hidden_pick(),
            ActionType::Ban => Self::hidden_ban(),
            ActionType::Snipe => Self::hidden_snipe(),
        }
    }

    /// Whether this entry is a non-playable technical marker.
    #[must_use]
    pub fn is_technical(&self) -> bool {
        self.game_version == GameVersion::Technical
    }

    /// The full draftable roster across all releases.
    ///
    /// Technical entries are not included; callers building pools from a
    /// wider source still filter with [`Civilisation::is_technical`].
    #[must_use]
    pub fn all() -> Vec<Civilisation> {
        use GameVersion::*;

        let roster: [(&str, GameVersion); 31] = [
            ("Britons", AgeOfKings),
            ("Byzantines", AgeOfKings),
            ("Celts", AgeOfKings),
            ("Chinese", AgeOfKings),
            ("Franks", AgeOfKings),
            ("Goths", AgeOfKings),
            ("Japanese", AgeOfKings),
            ("Mongols", AgeOfKings),
            ("Persians", AgeOfKings),
            ("Saracens", AgeOfKings),
            ("Teutons", AgeOfKings),
            ("Turks", AgeOfKings),
            ("Vikings", AgeOfKings),
            ("Aztecs", TheConquerors),
            ("Huns", TheConquerors),
            ("Koreans", TheConquerors),
            ("Mayans", TheConquerors),
            ("Spanish", TheConquerors),
            ("Incas", TheForgotten),
            ("Indians", TheForgotten),
            ("Italians", TheForgotten),
            ("Magyars", TheForgotten),
            ("Slavs", TheForgotten),
            ("Berbers", AfricanKingdoms),
            ("Ethiopians", AfricanKingdoms),
            ("Malians", AfricanKingdoms),
            ("Portuguese", AfricanKingdoms),
            ("Burmese", RiseOfTheRajas),
            ("Khmer", RiseOfTheRajas),
            ("Malay", RiseOfTheRajas),
            ("Vietnamese", RiseOfTheRajas),
        ];

        roster
            .iter()
            .map(|(name, version)| Civilisation::new(*name, *version))
            .collect()
    }
}

impl std::fmt::Display for Civilisation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
