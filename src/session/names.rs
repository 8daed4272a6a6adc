//! Random display names for parties that never chose one.
//!
//! Deterministic: the same seed yields the same sequence, so a session
//! authority can hand out reproducible names and tests stay stable.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const ADJECTIVES: [&str; 12] = [
    "Brave", "Cunning", "Swift", "Stubborn", "Wandering", "Grim", "Merry", "Silent", "Reckless",
    "Patient", "Humble", "Fierce",
];

const UNITS: [&str; 12] = [
    "Archer", "Paladin", "Mangudai", "Conquistador", "Samurai", "Berserk", "Cataphract",
    "Longbowman", "Mameluke", "Janissary", "Huskarl", "Chu Ko Nu",
];

/// Generates display names like "Cunning Mangudai".
#[derive(Clone, Debug)]
pub struct NameGenerator {
    rng: ChaCha8Rng,
}

impl NameGenerator {
    /// Create a generator with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// The next generated name.
    pub fn next_name(&mut self) -> String {
        let adjective = ADJECTIVES[self.rng.gen_range(0..ADJECTIVES.len())];
        let unit = UNITS[self.rng.gen_range(0..UNITS.len())];
        format!("{} {}", adjective, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut a = NameGenerator::new(42);
        let mut b = NameGenerator::new(42);

        for _ in 0..20 {
            assert_eq!(a.next_name(), b.next_name());
        }
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = NameGenerator::new(1);
        let mut b = NameGenerator::new(2);

        let names_a: Vec<String> = (0..10).map(|_| a.next_name()).collect();
        let names_b: Vec<String> = (0..10).map(|_| b.next_name()).collect();
        assert_ne!(names_a, names_b);
    }

    #[test]
    fn test_shape() {
        let mut generator = NameGenerator::new(7);
        let name = generator.next_name();
        let (adjective, unit) = name.split_once(' ').unwrap();
        assert!(ADJECTIVES.contains(&adjective));
        assert!(UNITS.iter().any(|u| name.ends_with(u)));
        assert!(!adjective.is_empty() && !unit.is_empty());
    }
}
