//! Random playout tests: invariants that must hold in every reachable state.

use std::time::Instant;

use proptest::prelude::*;

use rust_klondike::advisor::{advise, Hint};
use rust_klondike::cards::Rank;
use rust_klondike::core::{GameMode, Move, RecyclePolicy, RulesConfig};
use rust_klondike::rules::{Klondike, RulesEngine};

fn mode_strategy() -> impl Strategy<Value = GameMode> {
    prop_oneof![
        Just(GameMode::Normal),
        Just(GameMode::Hard),
        Just(GameMode::Timed { limit_secs: 300 }),
    ]
}

fn recycle_strategy() -> impl Strategy<Value = RecyclePolicy> {
    prop_oneof![Just(RecyclePolicy::Shuffle), Just(RecyclePolicy::Reverse)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn test_random_playout_keeps_invariants(
        seed in any::<u64>(),
        mode in mode_strategy(),
        recycle in recycle_strategy(),
        choices in prop::collection::vec(any::<usize>(), 0..300),
    ) {
        let engine = Klondike::new(RulesConfig::default().with_recycle(recycle));
        let mut state = engine.new_game(seed, mode, Instant::now());
        prop_assert_eq!(state.layout.check_integrity(), Ok(()));

        for choice in choices {
            let moves = engine.legal_moves(&state);
            if moves.is_empty() {
                prop_assert!(state.is_won() || state.layout.stock.is_empty());
                break;
            }

            // The advisor only ever recommends a legal move.
            if let Some(hinted) = advise(&state.layout).to_move() {
                prop_assert!(moves.contains(&hinted), "hint {:?} not legal", hinted);
            }

            let mv = moves[choice % moves.len()];
            let before = state.clone();
            let outcome = engine.apply_move(&mut state, &mv);
            prop_assert!(outcome.is_ok(), "{:?} rejected: {:?}", mv, outcome);

            prop_assert_eq!(state.layout.check_integrity(), Ok(()));
            prop_assert!(state.score >= before.score);
            prop_assert_eq!(state.move_count, before.move_count + 1);
            prop_assert_eq!(state.is_won(), state.layout.foundation_cards() == 52);

            if let Move::TableauToTableau { from, to, .. } = mv {
                let moved = state.layout.tableau[to].len() - before.layout.tableau[to].len();
                let bottom = state.layout.tableau[to]
                    .get(before.layout.tableau[to].len())
                    .copied();
                prop_assert!(moved > 0);
                prop_assert_eq!(
                    before.layout.tableau[from].len() - state.layout.tableau[from].len(),
                    moved
                );
                match (before.layout.tableau[to].top(), bottom) {
                    (None, Some(card)) => prop_assert_eq!(card.rank, Rank::King),
                    (Some(top), Some(card)) => prop_assert!(card.stacks_on(top)),
                    (_, None) => prop_assert!(false, "nothing landed on column {}", to),
                }
            }
        }
    }

    #[test]
    fn test_advisor_playout_never_breaks_table(seed in any::<u64>()) {
        let engine = Klondike::default();
        let mut state = engine.new_game(seed, GameMode::Normal, Instant::now());

        for _ in 0..400 {
            let Some(mv) = advise(&state.layout).to_move() else {
                break;
            };
            prop_assert!(engine.apply_move(&mut state, &mv).is_ok());
            prop_assert_eq!(state.layout.check_integrity(), Ok(()));
        }
        if advise(&state.layout) == Hint::NoMove {
            prop_assert!(state.is_won() || state.layout.stock.is_empty());
        }
    }
}
