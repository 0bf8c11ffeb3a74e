//! Seesaw CLI - play and inspect number-balance puzzles from the terminal.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]

mod cli;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

/// Seesaw - a number-balancing arithmetic puzzle
#[derive(Parser, Debug)]
#[command(name = "seesaw")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play an interactive puzzle in the terminal
    Play {
        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Deal a puzzle and print it without playing
    Deal {
        /// Random seed (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();

    let result = match args.command {
        Commands::Play { seed } => cli::play::execute(seed),

        Commands::Deal { seed, format } => cli::deal::execute(seed, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
