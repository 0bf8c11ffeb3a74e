#![no_main]

//! Intent sequence fuzzer.
//!
//! Feeds arbitrary intent sequences into the reducer and asserts the digit
//! conservation invariants after every step. The reducer is total, so no
//! input may panic or leak/duplicate a digit.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seesaw::game::{Digit, GameState, Intent, Operator, Side, check_invariants};

/// A fuzzer-generated user interaction.
#[derive(Arbitrary, Debug, Clone, Copy)]
enum FuzzIntent {
    /// Select a digit value on a side.
    Select { value: u8, right: bool },
    /// Choose the pending operator.
    SetOperator(u8),
    /// Commit the pending selection.
    Commit { right: bool },
    /// Remove the newest ledger entry on a side.
    RemoveNewest { right: bool },
    /// Remove by raw id (mostly unknown ids, exercising the no-op guard).
    RemoveId { id: u32, right: bool },
    /// Reveal the balance result.
    CheckBalance,
    /// End the game without balancing.
    GiveUp,
    /// Hide the balance result.
    Dismiss,
    /// Deal a fresh puzzle.
    NewGame,
}

/// Structured input for intent fuzzing.
#[derive(Arbitrary, Debug)]
struct IntentInput {
    /// Deal seed.
    seed: u64,
    /// Interactions to apply in order.
    intents: Vec<FuzzIntent>,
}

fn side(right: bool) -> Side {
    if right { Side::Right } else { Side::Left }
}

/// Map a fuzzer interaction onto a concrete intent, given the current state.
fn lower(state: &GameState, fuzz: FuzzIntent) -> Option<Intent> {
    match fuzz {
        FuzzIntent::Select { value, right } => {
            let value = Digit::new(value % 9 + 1)?;
            Some(Intent::SelectNumber {
                value,
                side: side(right),
            })
        }
        FuzzIntent::SetOperator(code) => Some(Intent::SelectOperator(
            Operator::ALL[usize::from(code) % Operator::ALL.len()],
        )),
        FuzzIntent::Commit { right } => Some(Intent::Commit(side(right))),
        FuzzIntent::RemoveNewest { right } => {
            let target = side(right);
            let id = state.side(target).ledger().entries().last().map(|op| op.id)?;
            Some(Intent::Remove { id, side: target })
        }
        FuzzIntent::RemoveId { id, right } => Some(Intent::Remove {
            id: id % 16,
            side: side(right),
        }),
        FuzzIntent::CheckBalance => Some(Intent::CheckBalance),
        FuzzIntent::GiveUp => Some(Intent::GiveUp),
        FuzzIntent::Dismiss => Some(Intent::DismissResult),
        FuzzIntent::NewGame => Some(Intent::NewGame),
    }
}

fuzz_target!(|input: IntentInput| {
    let mut state = GameState::new(input.seed);

    let violations = check_invariants(&state);
    assert!(
        violations.is_empty(),
        "Invariants violated at deal: {:?}",
        violations
    );

    // Cap sequence length to keep individual runs fast
    for fuzz in input.intents.into_iter().take(64) {
        if let Some(intent) = lower(&state, fuzz) {
            state.apply(intent);
        }

        let violations = check_invariants(&state);
        assert!(
            violations.is_empty(),
            "Invariants violated after {:?}: {:?}",
            fuzz,
            violations
        );
    }
});
