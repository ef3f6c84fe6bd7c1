//! Terminal tic-tac-toe: one human against a scripted or random computer.
//!
//! # Architecture
//!
//! - **Config**: the JSON game setup, validated once at startup
//! - **Game**: the turn state machine (`PlayerTurn`, `ComputerTurn`, `Terminal`)
//! - **Players**: the prompting human and the scripted-then-random computer
//! - **Orchestrator**: the turn loop tying the game to a console
//!
//! Board logic lives in [`tictactoe_board`].
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_term::{ComputerPlayer, Console, GameConfig, Orchestrator, Outcome};
//!
//! let config = GameConfig::from_json(
//!     r#"{"board": "XX OO    ", "playerLetter": "X", "computerLetter": "O", "computerMoves": []}"#,
//! )?;
//! let console = Console::new(Cursor::new("A3\n"), Vec::new());
//! let mut orchestrator = Orchestrator::new(&config, ComputerPlayer::with_seed(vec![], 1), console);
//! assert_eq!(orchestrator.run()?, Outcome::PlayerWins);
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod error;
mod game;
mod orchestrator;
pub mod players;
pub mod ui;

pub use cli::Cli;
pub use config::{DEFAULT_CONFIG_PATH, GameConfig};
pub use console::Console;
pub use error::{ConfigError, ConfigErrorKind, TurnError};
pub use game::{Game, Outcome, Phase};
pub use orchestrator::Orchestrator;
pub use players::{ComputerPlayer, HumanPlayer};
