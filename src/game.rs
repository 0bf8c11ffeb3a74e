//! Game core for Seesaw.
//!
//! Implements the puzzle rules:
//! - Two independent sides, each dealt six digits
//! - Pairwise combination of pool digits via `+ - * /`
//! - An operation ledger per side whose results sum to that side's total
//! - Balance checking and the game lifecycle flags
//!
//! Every state transition is total: malformed input is a guarded no-op,
//! never an error.

mod arith;
mod digit;
mod intent;
mod invariants;
mod ledger;
mod pool;
mod rng;
mod selection;
mod state;

pub use arith::Operator;
pub use digit::Digit;
pub use intent::Intent;
pub use invariants::{InvariantViolation, assert_invariants, check_invariants};
pub use ledger::{Ledger, OpId, Operation};
pub use pool::NumberPool;
pub use selection::Selection;
pub use state::{GameState, POOL_SIZE, Side, SideState};
