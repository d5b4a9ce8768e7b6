//! Keypad tic-tac-toe - console game against a heuristic opponent.

#![warn(missing_docs)]

mod cli;
mod config;
mod input;
mod players;
mod screen;
mod session;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use config::GameConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Log to stderr so the rendered board stays clean on stdout
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = if cli.config.exists() {
        GameConfig::from_file(&cli.config)?
    } else {
        debug!(path = %cli.config.display(), "Config file not found, using defaults");
        GameConfig::default()
    };

    // Command-line flags override the config file
    let strategy = cli.strategy.unwrap_or(*config.strategy());
    let seed = cli.seed.or(*config.seed());

    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    info!(%strategy, ?seed, "Starting session");

    session::Session::new(config.player_name().clone(), strategy, rng).run()
}
