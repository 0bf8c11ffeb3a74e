//! Output formatting utilities for CLI.

use seesaw::game::{GameState, Side};
use serde::Serialize;

/// JSON-serializable dealt puzzle.
#[derive(Debug, Serialize)]
pub(super) struct JsonDeal {
    /// Random seed used.
    pub(super) seed: u64,
    /// The six digits dealt to the left side.
    pub(super) left: Vec<u8>,
    /// The six digits dealt to the right side.
    pub(super) right: Vec<u8>,
}

impl JsonDeal {
    /// Create from a freshly dealt game.
    pub(super) fn from_state(state: &GameState, seed: u64) -> Self {
        Self {
            seed,
            left: side_digits(state, Side::Left),
            right: side_digits(state, Side::Right),
        }
    }
}

fn side_digits(state: &GameState, side: Side) -> Vec<u8> {
    state
        .side(side)
        .dealt()
        .iter()
        .map(|d| d.get())
        .collect()
}

/// Format a dealt puzzle as human-readable text.
pub(super) fn format_text(state: &GameState, seed: u64) -> String {
    let mut output = String::new();

    output.push_str(&format!("Puzzle (seed: {seed})\n"));
    for side in Side::BOTH {
        let digits: Vec<String> = state
            .side(side)
            .dealt()
            .iter()
            .map(ToString::to_string)
            .collect();
        let label = format!("{side}:");
        output.push_str(&format!("  {label:<6} {}\n", digits.join(" ")));
    }

    output
}
