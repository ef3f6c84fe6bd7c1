//! Command-line interface for the terminal game.

use crate::config::DEFAULT_CONFIG_PATH;
use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal against a scripted or random computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a scripted or random computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the JSON game configuration
    #[arg(default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Seed for the computer's random moves (random each run if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
