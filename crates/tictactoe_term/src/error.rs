//! Error types for configuration loading and turn handling.

use derive_more::{Display, Error};
use tictactoe_board::MoveError;
use tracing::instrument;

use crate::Phase;

/// Which stage of configuration loading failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum ConfigErrorKind {
    /// The file could not be read or is not JSON.
    #[strum(to_string = "Config load")]
    Load,
    /// The JSON is readable but does not describe a playable game.
    #[strum(to_string = "Config shape")]
    Shape,
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} error: {} at {}:{}", kind, message, file, line)]
pub struct ConfigError {
    /// Failure category.
    pub kind: ConfigErrorKind,
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(kind: ConfigErrorKind, message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Unreadable file or malformed JSON.
    #[track_caller]
    pub fn load(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Load, message)
    }

    /// Missing key, bad value or unplayable board.
    #[track_caller]
    pub fn shape(message: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Shape, message)
    }
}

/// Error returned when a move cannot be applied to the game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum TurnError {
    /// The move was offered while the game was in another phase.
    #[display("Move not allowed during {:?}", _0)]
    #[from(ignore)]
    WrongTurn(Phase),

    /// The board rejected the move.
    #[display("{}", _0)]
    Move(MoveError),
}

impl std::error::Error for TurnError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TurnError::Move(err) => Some(err),
            TurnError::WrongTurn(_) => None,
        }
    }
}
