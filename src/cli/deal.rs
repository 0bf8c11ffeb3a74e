//! Deal command implementation.

// Seed derivation truncates wall-clock nanoseconds on purpose
#![allow(clippy::cast_possible_truncation)]

use super::output::{JsonDeal, format_text};
use super::{CliError, OutputFormat};
use seesaw::game::GameState;

/// Execute the deal command.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub(crate) fn execute(seed: Option<u64>, format: OutputFormat) -> Result<(), CliError> {
    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let state = GameState::new(seed);

    match format {
        OutputFormat::Text => {
            print!("{}", format_text(&state, seed));
        }
        OutputFormat::Json => {
            let deal = JsonDeal::from_state(&state, seed);
            let json = serde_json::to_string_pretty(&deal)
                .map_err(|e| CliError::new(format!("JSON serialization failed: {e}")))?;
            println!("{json}");
        }
    }

    Ok(())
}
