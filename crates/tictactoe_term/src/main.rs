//! Terminal tic-tac-toe binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use tictactoe_term::{Cli, ComputerPlayer, Console, GameConfig, Orchestrator};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = GameConfig::from_file(&cli.config)
        .with_context(|| format!("Invalid game configuration in {}", cli.config.display()))?;

    run_game(&config, cli.seed)
}

/// Logs go to stderr at `warn`, or to a file at `info`; `RUST_LOG` overrides.
fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    let filter = |default: &str| {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
    };

    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter("info"))
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter("warn"))
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

#[instrument(skip(config))]
fn run_game(config: &GameConfig, seed: Option<u64>) -> Result<()> {
    let script = config.computer_moves().clone();
    let computer = match seed {
        Some(seed) => ComputerPlayer::with_seed(script, seed),
        None => ComputerPlayer::new(script),
    };

    let console = Console::new(std::io::stdin().lock(), std::io::stdout());
    let mut orchestrator = Orchestrator::new(config, computer, console);
    let outcome = orchestrator.run()?;
    info!(%outcome, "Finished");
    Ok(())
}
