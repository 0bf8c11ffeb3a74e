//! Game invariants - sanity checks that detect bugs.
//!
//! Every reducer transition preserves these by construction, so a violation
//! always indicates a bug. They are cheap enough to assert after every
//! intent in tests and fuzzing.

use crate::game::{Digit, GameState, POOL_SIZE, Side};

/// Invariant violation error.
#[derive(Debug, Clone)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub message: String,
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Occurrence counts per digit value, indexed by value.
fn digit_counts(digits: impl Iterator<Item = Digit>) -> [usize; 10] {
    let mut counts = [0usize; 10];
    for digit in digits {
        counts[usize::from(digit.get())] += 1;
    }
    counts
}

/// Check all game invariants.
///
/// Returns a list of violations found, or empty if all invariants hold.
/// These are bug detectors, not gameplay limits.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();

    for side in Side::BOTH {
        let side_state = state.side(side);
        let pool = side_state.pool();
        let ledger = side_state.ledger();

        // Digit conservation: pool plus ledger operands equals the deal
        let dealt = digit_counts(side_state.dealt().iter().copied());
        let held = digit_counts(
            pool.digits().iter().copied().chain(
                ledger
                    .entries()
                    .iter()
                    .flat_map(|op| [op.operand1, op.operand2]),
            ),
        );
        if dealt != held {
            violations.push(InvariantViolation {
                message: format!(
                    "{side} side holds digit counts {held:?}, dealt {dealt:?}"
                ),
            });
        }

        // Count accounting: each committed operation consumed two digits
        let accounted = pool.len() + 2 * ledger.len();
        if accounted != POOL_SIZE {
            violations.push(InvariantViolation {
                message: format!(
                    "{side} side accounts for {accounted} digits, expected {POOL_SIZE}"
                ),
            });
        }

        // Ledger ids are unique
        for (i, op) in ledger.entries().iter().enumerate() {
            if ledger.entries()[..i].iter().any(|other| other.id == op.id) {
                violations.push(InvariantViolation {
                    message: format!("{side} side ledger reuses id {}", op.id),
                });
            }
        }
    }

    // Selection slots only hold values present in the active pool
    let selection = state.selection();
    let active_pool = state.side(state.active_side()).pool();
    for value in [selection.operand1, selection.operand2]
        .into_iter()
        .flatten()
    {
        if !active_pool.contains(value) {
            violations.push(InvariantViolation {
                message: format!(
                    "selected digit {value} is not in the {} pool",
                    state.active_side()
                ),
            });
        }
    }

    // Value-based toggling can never select the same value twice
    if let (Some(a), Some(b)) = (selection.operand1, selection.operand2)
        && a == b
    {
        violations.push(InvariantViolation {
            message: format!("both operand slots hold {a}"),
        });
    }

    violations
}

/// Assert all game invariants hold, panicking if any are violated.
///
/// Only active in debug builds. No-op in release builds.
///
/// # Panics
///
/// Panics with detailed message if any invariant is violated.
#[cfg(debug_assertions)]
pub fn assert_invariants(state: &GameState) {
    let violations = check_invariants(state);
    if !violations.is_empty() {
        let messages: Vec<_> = violations.iter().map(|v| v.message.as_str()).collect();
        panic!("Game invariant violations:\n  - {}", messages.join("\n  - "));
    }
}

/// No-op in release builds.
#[cfg(not(debug_assertions))]
pub fn assert_invariants(_state: &GameState) {}
