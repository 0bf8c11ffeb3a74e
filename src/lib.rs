// Allow unwrap and imprecise float comparison in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::float_cmp))]
//! Seesaw: a number-balancing arithmetic puzzle for the terminal.
//!
//! The player is dealt six digits on each pan of a scale and combines them
//! pairwise with arithmetic operators until the running totals of both pans
//! are equal. The crate provides:
//! - Deterministic dealing from a single `u64` seed
//! - A total (never-failing) intent reducer over the game state
//! - Conservation invariants usable as bug detectors in tests and fuzzing
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │       TUI / CLI (binary)            │
//! ├─────────────────────────────────────┤
//! │    Intent Reducer (GameState)       │
//! ├─────────────────────────────────────┤
//! │  Pools · Ledgers · Selection        │
//! └─────────────────────────────────────┘
//! ```

pub mod game;
pub mod prefs;
pub mod share;

// Re-export key game types at crate root for convenience
pub use game::{
    Digit, GameState, Intent, Ledger, NumberPool, OpId, Operation, Operator, Selection, Side,
};
