//! Game configuration, read once from a JSON file at startup.
//!
//! ```json
//! {
//!   "board": "         ",
//!   "playerLetter": "X",
//!   "computerLetter": "O",
//!   "computerMoves": ["B2", "A1"]
//! }
//! ```

use crate::{ConfigError, ConfigErrorKind};
use derive_getters::Getters;
use serde::Deserialize;
use serde_json::error::Category;
use std::path::Path;
use tictactoe_board::{Board, Player};
use tracing::{debug, info, instrument};

/// Configuration file used when none is given on the command line.
pub const DEFAULT_CONFIG_PATH: &str = "defaultConfig.json";

/// The JSON document as written on disk.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawConfig {
    board: String,
    player_letter: Player,
    computer_letter: Player,
    computer_moves: Vec<String>,
}

/// A validated, immutable game setup.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct GameConfig {
    /// Starting board; never full.
    board: Board,
    /// Mark placed by the human.
    player_letter: Player,
    /// Mark placed by the computer.
    computer_letter: Player,
    /// Predetermined computer moves in algebraic notation, tried in order.
    computer_moves: Vec<String>,
}

impl GameConfig {
    /// Validates a game setup.
    #[instrument(skip(board_string, computer_moves))]
    pub fn new(
        board_string: &str,
        player_letter: Player,
        computer_letter: Player,
        computer_moves: Vec<String>,
    ) -> Result<Self, ConfigError> {
        let board: Board = board_string
            .parse()
            .map_err(|e| ConfigError::shape(format!("Invalid board: {}", e)))?;

        if board.is_full() {
            return Err(ConfigError::shape("Board has no empty squares"));
        }

        if player_letter == computer_letter {
            return Err(ConfigError::shape(format!(
                "Player and computer cannot both be {}",
                player_letter
            )));
        }

        Ok(Self {
            board,
            player_letter,
            computer_letter,
            computer_moves,
        })
    }

    /// Parses and validates a JSON document.
    #[instrument(skip(json))]
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(json).map_err(|e| {
            let kind = match e.classify() {
                // Well-formed JSON with a missing key or a value of the wrong type.
                Category::Data => ConfigErrorKind::Shape,
                Category::Io | Category::Syntax | Category::Eof => ConfigErrorKind::Load,
            };
            ConfigError::new(kind, format!("Failed to parse config: {}", e))
        })?;
        debug!(?raw, "Parsed config");

        Self::new(
            &raw.board,
            raw.player_letter,
            raw.computer_letter,
            raw.computer_moves,
        )
    }

    /// Loads configuration from a JSON file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::load(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_json(&content)?;
        info!(
            player = %config.player_letter,
            computer = %config.computer_letter,
            scripted_moves = config.computer_moves.len(),
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// True when the human places the first mark.
    pub fn player_moves_first(&self) -> bool {
        self.player_letter == Player::X
    }
}
