//! Property-based tests for the puzzle reducer.
//!
//! These tests verify digit conservation and the reducer guards under
//! arbitrary intent sequences.
//! Run with: cargo test --release prop_state

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::float_cmp)]

use proptest::prelude::*;

use seesaw::game::{
    Digit, GameState, Intent, Operator, POOL_SIZE, Side, check_invariants,
};

/// One fuzzer-shaped user interaction.
#[derive(Debug, Clone, Copy)]
enum Step {
    Select { value: u8, right: bool },
    SetOperator(u8),
    Commit { right: bool },
    RemoveNewest { right: bool },
    RemoveId { id: u32, right: bool },
    CheckBalance,
    GiveUp,
    Dismiss,
    NewGame,
}

fn side(right: bool) -> Side {
    if right { Side::Right } else { Side::Left }
}

fn operator(code: u8) -> Operator {
    Operator::ALL[usize::from(code) % Operator::ALL.len()]
}

fn apply_step(state: &mut GameState, step: Step) {
    match step {
        Step::Select { value, right } => {
            let value = Digit::new(value % 9 + 1).unwrap();
            state.apply(Intent::SelectNumber {
                value,
                side: side(right),
            });
        }
        Step::SetOperator(code) => state.apply(Intent::SelectOperator(operator(code))),
        Step::Commit { right } => state.apply(Intent::Commit(side(right))),
        Step::RemoveNewest { right } => {
            let target = side(right);
            let id = state.side(target).ledger().entries().last().map(|op| op.id);
            if let Some(id) = id {
                state.apply(Intent::Remove { id, side: target });
            }
        }
        Step::RemoveId { id, right } => state.apply(Intent::Remove {
            id,
            side: side(right),
        }),
        Step::CheckBalance => state.apply(Intent::CheckBalance),
        Step::GiveUp => state.apply(Intent::GiveUp),
        Step::Dismiss => state.apply(Intent::DismissResult),
        Step::NewGame => state.apply(Intent::NewGame),
    }
}

fn step_strategy() -> impl Strategy<Value = Step> {
    prop_oneof![
        (any::<u8>(), any::<bool>()).prop_map(|(value, right)| Step::Select { value, right }),
        any::<u8>().prop_map(Step::SetOperator),
        any::<bool>().prop_map(|right| Step::Commit { right }),
        any::<bool>().prop_map(|right| Step::RemoveNewest { right }),
        (0u32..8, any::<bool>()).prop_map(|(id, right)| Step::RemoveId { id, right }),
        Just(Step::CheckBalance),
        Just(Step::GiveUp),
        Just(Step::Dismiss),
        Just(Step::NewGame),
    ]
}

/// Two digits of differing value from the side's pool, if the pool has any.
fn distinct_pair(state: &GameState, side: Side) -> Option<(Digit, Digit)> {
    let digits = state.side(side).pool().digits();
    let first = *digits.first()?;
    let second = digits.iter().copied().find(|&d| d != first)?;
    Some((first, second))
}

/// Two disjoint pairs, each of differing values, from the side's pool.
fn two_distinct_pairs(state: &GameState, side: Side) -> Option<[(Digit, Digit); 2]> {
    let digits = state.side(side).pool().digits();
    let mut used = [false; POOL_SIZE];
    let mut pairs = Vec::new();

    for _ in 0..2 {
        let mut found = None;
        'scan: for i in 0..digits.len() {
            if used[i] {
                continue;
            }
            for j in (i + 1)..digits.len() {
                if !used[j] && digits[i] != digits[j] {
                    found = Some((i, j));
                    break 'scan;
                }
            }
        }
        let (i, j) = found?;
        used[i] = true;
        used[j] = true;
        pairs.push((digits[i], digits[j]));
    }

    Some([pairs[0], pairs[1]])
}

fn commit_pair(state: &mut GameState, side: Side, pair: (Digit, Digit), op: Operator) {
    state.apply(Intent::SelectNumber {
        value: pair.0,
        side,
    });
    state.apply(Intent::SelectNumber {
        value: pair.1,
        side,
    });
    state.apply(Intent::SelectOperator(op));
    state.apply(Intent::Commit(side));
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(10000))]

    /// No intent sequence can violate the conservation invariants.
    #[test]
    fn prop_invariants_hold_under_intent_storm(
        seed in any::<u64>(),
        steps in prop::collection::vec(step_strategy(), 0..64)
    ) {
        let mut state = GameState::new(seed);
        prop_assert!(check_invariants(&state).is_empty());

        for step in steps {
            apply_step(&mut state, step);
            let violations = check_invariants(&state);
            prop_assert!(
                violations.is_empty(),
                "step {:?} broke invariants: {:?}",
                step,
                violations
            );
        }
    }

    /// A full selection commits exactly one operation and clears the picks.
    #[test]
    fn prop_commit_appends_exactly_one(seed in any::<u64>(), op_code in any::<u8>()) {
        let mut state = GameState::new(seed);
        let Some(pair) = distinct_pair(&state, Side::Left) else {
            // All six digits identical; value-based selection cannot pick two
            return Ok(());
        };

        commit_pair(&mut state, Side::Left, pair, operator(op_code));

        prop_assert_eq!(state.side(Side::Left).ledger().len(), 1);
        prop_assert_eq!(state.side(Side::Left).pool().len(), POOL_SIZE - 2);
        prop_assert!(state.selection().operand1.is_none());
        prop_assert!(state.selection().operand2.is_none());
        prop_assert!(state.selection().operator.is_none());
    }

    /// Commit without an operator (or with empty slots) is a no-op.
    #[test]
    fn prop_commit_requires_full_selection(seed in any::<u64>()) {
        let mut state = GameState::new(seed);

        state.apply(Intent::Commit(Side::Left));
        prop_assert!(state.side(Side::Left).ledger().is_empty());

        if let Some(pair) = distinct_pair(&state, Side::Left) {
            state.apply(Intent::SelectNumber { value: pair.0, side: Side::Left });
            state.apply(Intent::SelectNumber { value: pair.1, side: Side::Left });
            state.apply(Intent::Commit(Side::Left));
            prop_assert!(state.side(Side::Left).ledger().is_empty());
            prop_assert_eq!(state.side(Side::Left).pool().len(), POOL_SIZE);
        }
    }

    /// Removing an operation and recommitting the same operands reproduces
    /// the same result.
    #[test]
    fn prop_remove_then_recommit_same_result(seed in any::<u64>(), op_code in any::<u8>()) {
        let mut state = GameState::new(seed);
        let Some(pair) = distinct_pair(&state, Side::Left) else {
            return Ok(());
        };
        let op = operator(op_code);

        commit_pair(&mut state, Side::Left, pair, op);
        let first = state.side(Side::Left).ledger().entries()[0];

        state.apply(Intent::Remove { id: first.id, side: Side::Left });
        prop_assert!(state.side(Side::Left).ledger().is_empty());
        prop_assert_eq!(state.side(Side::Left).pool().len(), POOL_SIZE);

        commit_pair(&mut state, Side::Left, pair, op);
        let second = state.side(Side::Left).ledger().entries()[0];

        prop_assert_eq!(second.result, first.result);
    }

    /// Totals do not depend on the order operations were committed in.
    /// Exercised with integer-valued operators, where f64 summation is exact.
    #[test]
    fn prop_totals_order_independent(
        seed in any::<u64>(),
        op_a in 0u8..3,
        op_b in 0u8..3
    ) {
        let template = GameState::new(seed);
        let Some([pair_a, pair_b]) = two_distinct_pairs(&template, Side::Left) else {
            return Ok(());
        };

        let mut forward = GameState::new(seed);
        commit_pair(&mut forward, Side::Left, pair_a, operator(op_a));
        commit_pair(&mut forward, Side::Left, pair_b, operator(op_b));

        let mut reversed = GameState::new(seed);
        commit_pair(&mut reversed, Side::Left, pair_b, operator(op_b));
        commit_pair(&mut reversed, Side::Left, pair_a, operator(op_a));

        prop_assert_eq!(forward.totals(), reversed.totals());
    }

    /// Checking the balance completes the game exactly when totals match.
    #[test]
    fn prop_check_balance_completes_iff_equal(
        seed in any::<u64>(),
        steps in prop::collection::vec(step_strategy(), 0..32)
    ) {
        let mut state = GameState::new(seed);
        for step in steps {
            apply_step(&mut state, step);
        }

        let was_complete = state.game_complete();
        state.apply(Intent::CheckBalance);

        prop_assert!(state.show_balance_result());
        if state.is_balanced() {
            prop_assert!(state.game_complete());
        } else {
            prop_assert_eq!(state.game_complete(), was_complete);
        }
    }

    /// The same seed always deals the same pools.
    #[test]
    fn prop_same_seed_deals_identically(seed in any::<u64>()) {
        let a = GameState::new(seed);
        let b = GameState::new(seed);
        for side in Side::BOTH {
            prop_assert_eq!(a.side(side).dealt(), b.side(side).dealt());
        }
    }

    /// A new game resets everything, whatever came before.
    #[test]
    fn prop_new_game_always_resets(
        seed in any::<u64>(),
        steps in prop::collection::vec(step_strategy(), 0..32)
    ) {
        let mut state = GameState::new(seed);
        for step in steps {
            apply_step(&mut state, step);
        }

        state.apply(Intent::NewGame);

        for side in Side::BOTH {
            prop_assert_eq!(state.side(side).pool().len(), POOL_SIZE);
            prop_assert!(state.side(side).ledger().is_empty());
        }
        prop_assert!(state.selection().operand1.is_none());
        prop_assert!(state.selection().operand2.is_none());
        prop_assert!(state.selection().operator.is_none());
        prop_assert!(!state.game_complete());
        prop_assert!(!state.show_balance_result());
    }
}
