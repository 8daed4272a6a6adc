//! The action taxonomy: scheduled action variants and their coarse
//! categories.
//!
//! A scheduled action combines a coarse category ([`ActionType`]) with two
//! orthogonal modifiers:
//!
//! - **exclusivity** - exclusive (the plain default), non-exclusive
//!   (shared), or global (affects both parties at once),
//! - **visibility** - visible (default) or hidden (the chosen civilisation
//!   is concealed until reveal).
//!
//! Hidden variants without an explicit `Exclusive` in the name are the
//! non-exclusive forms: an exclusivity check against a concealed choice
//! would leak that choice through the rejection, so hidden defaults to
//! shared and exclusivity must be opted into.
//!
//! The mappings [`Action::action_type`], [`Action::is_hidden`] and
//! [`Action::exclusivity`] are total: every variant is covered, and the
//! compiler enforces that any new variant extends all three.

use serde::{Deserialize, Serialize};

/// Coarse category of an action, independent of modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionType {
    Pick,
    Ban,
    Snipe,
}

/// Exclusivity modifier of a scheduled action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Exclusivity {
    /// Binds the acting player only; repeating it is a rule violation.
    Exclusive,
    /// Shared: no duplicate guard applies.
    NonExclusive,
    /// Affects both parties simultaneously.
    Global,
}

/// A scheduled action variant: category plus modifiers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Pick,
    NonexclusivePick,
    GlobalPick,
    HiddenPick,
    HiddenExclusivePick,
    Ban,
    NonexclusiveBan,
    HiddenBan,
    HiddenExclusiveBan,
    HiddenGlobalBan,
    Snipe,
    HiddenSnipe,
}

impl Action {
    /// Every variant, in declaration order. Used to exercise the totality
    /// of the mapping functions and the wire encoding.
    pub const ALL: [Action; 12] = [
        Action::Pick,
        Action::NonexclusivePick,
        Action::GlobalPick,
        Action::HiddenPick,
        Action::HiddenExclusivePick,
        Action::Ban,
        Action::NonexclusiveBan,
        Action::HiddenBan,
        Action::HiddenExclusiveBan,
        Action::HiddenGlobalBan,
        Action::Snipe,
        Action::HiddenSnipe,
    ];

    /// The coarse category of this variant.
    #[must_use]
    pub fn action_type(self) -> ActionType {
        match self {
            Action::Pick
            | Action::NonexclusivePick
            | Action::GlobalPick
            | Action::HiddenPick
            | Action::HiddenExclusivePick => ActionType::Pick,
            Action::Ban
            | Action::NonexclusiveBan
            | Action::HiddenBan
            | Action::HiddenExclusiveBan
            | Action::HiddenGlobalBan => ActionType::Ban,
            Action::Snipe | Action::HiddenSnipe => ActionType::Snipe,
        }
    }

    /// Whether the chosen civilisation is concealed until reveal.
    #[must_use]
    pub fn is_hidden(self) -> bool {
        matches!(
            self,
            Action::HiddenPick
                | Action::HiddenExclusivePick
                | Action::HiddenBan
                | Action::HiddenExclusiveBan
                | Action::HiddenGlobalBan
                | Action::HiddenSnipe
        )
    }

    /// The exclusivity modifier of this variant.
    ///
    /// Snipes carry the plain default: exclusivity is enforced for them by
    /// the chain-consumption rule, not by a duplicate guard.
    #[must_use]
    pub fn exclusivity(self) -> Exclusivity {
        match self {
            Action::Pick
            | Action::HiddenExclusivePick
            | Action::Ban
            | Action::HiddenExclusiveBan
            | Action::Snipe
            | Action::HiddenSnipe => Exclusivity::Exclusive,
            Action::NonexclusivePick
            | Action::HiddenPick
            | Action::NonexclusiveBan
            | Action::HiddenBan => Exclusivity::NonExclusive,
            Action::GlobalPick | Action::HiddenGlobalBan => Exclusivity::Global,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_lists_every_variant_once() {
        let mut seen = Action::ALL.to_vec();
        seen.sort_by_key(|a| *a as u8);
        seen.dedup();
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn test_action_type_by_category() {
        for action in Action::ALL {
            let expected = match action {
                Action::Snipe | Action::HiddenSnipe => ActionType::Snipe,
                a if format!("{:?}", a).contains("Pick") => ActionType::Pick,
                _ => ActionType::Ban,
            };
            assert_eq!(action.action_type(), expected, "{:?}", action);
        }
    }

    #[test]
    fn test_hidden_variants() {
        let hidden: Vec<Action> = Action::ALL.iter().copied().filter(|a| a.is_hidden()).collect();
        assert_eq!(
            hidden,
            vec![
                Action::HiddenPick,
                Action::HiddenExclusivePick,
                Action::HiddenBan,
                Action::HiddenExclusiveBan,
                Action::HiddenGlobalBan,
                Action::HiddenSnipe,
            ]
        );
    }

    #[test]
    fn test_global_variants() {
        let global: Vec<Action> = Action::ALL
            .iter()
            .copied()
            .filter(|a| a.exclusivity() == Exclusivity::Global)
            .collect();
        assert_eq!(global, vec![Action::GlobalPick, Action::HiddenGlobalBan]);
    }

    #[test]
    fn test_hidden_defaults_to_nonexclusive() {
        assert_eq!(Action::HiddenPick.exclusivity(), Exclusivity::NonExclusive);
        assert_eq!(Action::HiddenBan.exclusivity(), Exclusivity::NonExclusive);
        assert_eq!(
            Action::HiddenExclusivePick.exclusivity(),
            Exclusivity::Exclusive
        );
        assert_eq!(
            Action::HiddenExclusiveBan.exclusivity(),
            Exclusivity::Exclusive
        );
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_string(&Action::HiddenExclusivePick).unwrap(),
            "\"HIDDEN_EXCLUSIVE_PICK\""
        );
        assert_eq!(
            serde_json::to_string(&Action::NonexclusiveBan).unwrap(),
            "\"NONEXCLUSIVE_BAN\""
        );
        for action in Action::ALL {
            let json = serde_json::to_string(&action).unwrap();
            let parsed: Action = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, action);
        }
    }
}
