//! Property tests for deck dealing, the turn loop and best-score ordering.

mod common;

use common::Rig;
use memory_match::cards::{Deck, InstanceIds};
use memory_match::core::{Difficulty, GameRng};
use memory_match::engine::{GameEvent, GamePhase, SelectOutcome};
use memory_match::scores::{BestScore, ScoreBook};
use proptest::prelude::*;

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![Just(Difficulty::Easy), Just(Difficulty::Hard)]
}

/// One step of a random session.
#[derive(Clone, Debug)]
enum Step {
    Click(usize),
    Wait(u64),
    Reset,
    Start,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        8 => (0usize..24).prop_map(Step::Click),
        4 => (0u64..1_200).prop_map(Step::Wait),
        1 => Just(Step::Reset),
        1 => Just(Step::Start),
    ]
}

proptest! {
    #[test]
    fn prop_deck_is_well_formed(seed in any::<u64>(), difficulty in difficulty()) {
        let deck = Deck::build(difficulty, &mut InstanceIds::new(), &mut GameRng::new(seed));
        let pairs = difficulty.pair_count();

        prop_assert_eq!(deck.len(), 2 * pairs);
        let counts = deck.pair_counts();
        prop_assert_eq!(counts.len(), pairs);
        prop_assert!(counts.values().all(|&n| n == 2));
    }

    #[test]
    fn prop_turn_loop_invariants(seed in any::<u64>(), steps in prop::collection::vec(step(), 1..120)) {
        let mut rig = Rig::new(seed);
        rig.send(GameEvent::Start);

        for step in steps {
            let before_stats = *rig.engine.stats();
            let before_turn = *rig.engine.turn();

            match step {
                Step::Click(index) => {
                    let cards = rig.engine.deck().cards();
                    let id = cards[index % cards.len()].instance_id;
                    let outcome = rig.engine.select_card(id, &mut rig.host);
                    match outcome {
                        SelectOutcome::Ignored(_) => {
                            prop_assert_eq!(*rig.engine.stats(), before_stats);
                            prop_assert_eq!(*rig.engine.turn(), before_turn);
                        }
                        SelectOutcome::First => {
                            prop_assert_eq!(rig.engine.stats().moves, before_stats.moves);
                        }
                        SelectOutcome::Compared { .. } => {
                            prop_assert_eq!(rig.engine.stats().moves, before_stats.moves + 1);
                            prop_assert!(rig.engine.turn().input_locked);
                        }
                    }
                }
                Step::Wait(ms) => rig.advance(ms),
                Step::Reset => {
                    rig.send(GameEvent::Reset);
                    prop_assert_eq!(rig.engine.phase(), GamePhase::Idle);
                    prop_assert_eq!(rig.engine.stats().moves, 0);
                }
                Step::Start => rig.send(GameEvent::Start),
            }

            let stats = rig.engine.stats();
            let phase = rig.engine.phase();
            prop_assert!(stats.matched_pairs <= stats.total_pairs);
            prop_assert_eq!(stats.is_complete(), phase == GamePhase::Won);
            prop_assert_eq!(rig.engine.timer().running, phase.is_timed());
            prop_assert_eq!(rig.engine.turn().input_locked, phase == GamePhase::Resolving);
            prop_assert_eq!(
                rig.engine.deck().matched_count(),
                2 * stats.matched_pairs as usize
            );
            // Every stop paired with an earlier start.
            prop_assert!(rig.host.sched.repeating_stops() <= rig.host.sched.repeating_starts());
            prop_assert!(rig.host.sched.repeating_starts() - rig.host.sched.repeating_stops() <= 1);
            prop_assert_eq!(rig.host.sched.is_repeating(), rig.engine.timer().running);
            prop_assert!(rig.engine.deck().is_well_formed());
        }
    }

    #[test]
    fn prop_best_score_never_worsens(
        results in prop::collection::vec((1u32..60, 0u64..600_000), 1..30),
        difficulty in difficulty(),
    ) {
        let mut book = ScoreBook::default();
        for &(moves, time_ms) in &results {
            book.submit(difficulty, BestScore::new(moves, time_ms));
        }

        let best = book.best(difficulty).unwrap();
        for &(moves, time_ms) in &results {
            let game = BestScore::new(moves, time_ms);
            prop_assert!(!game.beats(Some(&best)));
        }
        let expected = results
            .iter()
            .map(|&(m, t)| BestScore::new(m, t))
            .min_by(|a, b| a.rank(b))
            .unwrap();
        prop_assert_eq!(best, expected);
    }
}
