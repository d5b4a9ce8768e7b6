//! Command-line interface for keypad tic-tac-toe.

use clap::Parser;
use keypad_tictactoe::Strategy;
use std::path::PathBuf;

/// Keypad tic-tac-toe - console game against a win-or-block opponent
#[derive(Parser, Debug)]
#[command(name = "keypad_cli")]
#[command(about = "Console tic-tac-toe with a heuristic computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Bot strategy: random, attacking, or defending
    #[arg(short, long)]
    pub strategy: Option<Strategy>,

    /// Seed for the computer's move selection (reproducible rounds)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Path to a TOML config file
    #[arg(short, long, default_value = "keypad.toml")]
    pub config: PathBuf,
}
