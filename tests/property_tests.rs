//! Property tests over generated schedules and snipe sequences.

use proptest::prelude::*;
use rustc_hash::FxHashMap;

use civdraft::{
    submit, Action, ActionType, Civilisation, Draft, DraftError, DraftEvent, GameVersion, Player,
    Preset, Turn, ValidationId,
};

const POOL: [&str; 3] = ["Aztecs", "Britons", "Celts"];

fn civ(name: &str) -> Civilisation {
    Civilisation::new(name, GameVersion::AgeOfKings)
}

fn ready_draft(turns: Vec<Turn>) -> Draft {
    let mut draft = Draft::new(Preset::new("property", turns));
    draft.host_ready = true;
    draft.guest_ready = true;
    draft
}

proptest! {
    /// Only the scheduled (player, category) pair is ever accepted, at
    /// every index of an arbitrary schedule.
    #[test]
    fn turn_order_is_strict(
        schedule in proptest::collection::vec((0..2usize, 0..3usize), 1..10),
        candidate_player in 0..2usize,
        candidate_category in 0..3usize,
    ) {
        let players = [Player::Host, Player::Guest];
        let actions = [Action::Pick, Action::Ban, Action::Snipe];
        let categories = [ActionType::Pick, ActionType::Ban, ActionType::Snipe];

        let turns: Vec<Turn> = schedule
            .iter()
            .map(|&(p, a)| Turn::new(players[p], actions[a]))
            .collect();
        let mut draft = ready_draft(turns);

        // Walk the schedule with always-legal events, probing each slot
        // with the generated candidate first.
        for index in 0..schedule.len() {
            let (scheduled_player, scheduled_action) = schedule[index];
            let probe = DraftEvent::player(
                players[candidate_player],
                categories[candidate_category],
                // A fresh name per slot keeps the content rules quiet.
                civ(&format!("Probe{}", index)),
            );
            let outcome = submit(&mut draft, probe);

            if candidate_player != scheduled_player {
                prop_assert_eq!(outcome, Err(DraftError::Rejected(ValidationId::Vld001)));
            } else if candidate_category != scheduled_action {
                prop_assert_eq!(outcome, Err(DraftError::Rejected(ValidationId::Vld002)));
            } else if categories[candidate_category] == ActionType::Snipe {
                // A matching snipe probe still has to clear the content
                // rules; with no opponent picks of that name it cannot.
                prop_assert_eq!(outcome, Err(DraftError::Rejected(ValidationId::Vld300)));
            } else {
                prop_assert_eq!(outcome, Ok(()));
            }

            // Advance the schedule if the probe did not already.
            if draft.next_action() == index {
                let filler = DraftEvent::player(
                    players[scheduled_player],
                    categories[scheduled_action],
                    civ(&format!("Filler{}", index)),
                );
                // Snipe slots cannot be legally filled without opponent
                // picks; stop walking there.
                if submit(&mut draft, filler).is_err() {
                    break;
                }
            }
        }
    }

    /// Snipe acceptance is exactly multiset availability: a snipe is
    /// accepted while the opponent still has an unconsumed pick of that
    /// civilisation, rejected under VLD_300 if it was never picked and
    /// under VLD_301 once the picks are used up.
    #[test]
    fn snipe_chain_matches_multiset_consumption(
        picks in proptest::collection::vec(0..3usize, 0..6),
        snipes in proptest::collection::vec(0..3usize, 0..8),
    ) {
        let mut turns: Vec<Turn> =
            vec![Turn::new(Player::Host, Action::NonexclusivePick); picks.len()];
        turns.extend(vec![Turn::new(Player::Guest, Action::Snipe); snipes.len()]);
        let mut draft = ready_draft(turns);

        let mut picked: FxHashMap<&str, usize> = FxHashMap::default();
        for &index in &picks {
            let name = POOL[index];
            submit(
                &mut draft,
                DraftEvent::player(Player::Host, ActionType::Pick, civ(name)),
            )
            .unwrap();
            *picked.entry(name).or_insert(0) += 1;
        }

        let mut remaining = picked.clone();
        for &index in &snipes {
            let name = POOL[index];
            let outcome = submit(
                &mut draft,
                DraftEvent::player(Player::Guest, ActionType::Snipe, civ(name)),
            );

            if !picked.contains_key(name) {
                prop_assert_eq!(outcome, Err(DraftError::Rejected(ValidationId::Vld300)));
            } else if remaining[name] == 0 {
                prop_assert_eq!(outcome, Err(DraftError::Rejected(ValidationId::Vld301)));
            } else {
                prop_assert_eq!(outcome, Ok(()));
                *remaining.get_mut(name).unwrap() -= 1;
            }
        }

        // The accepted snipes never exceed the picks they consumed.
        for (name, count) in &remaining {
            prop_assert!(picked[name] >= *count);
        }
    }
}
