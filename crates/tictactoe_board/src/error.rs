//! Error types for board decoding and move validation.

use crate::Coordinate;

/// A board string that cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardFormatError {
    /// The string has no squares at all.
    #[display("Board string is empty")]
    Empty,

    /// The length is not a perfect square.
    #[display("Board length {} is not a perfect square", _0)]
    NotSquare(usize),

    /// A character other than `' '`, `X` or `O`.
    #[display("Invalid square {:?} at index {}", character, index)]
    InvalidSquare {
        /// Offending character.
        character: char,
        /// Position of the character in the string.
        index: usize,
    },
}

impl std::error::Error for BoardFormatError {}

/// Algebraic notation that cannot be decoded.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum NotationError {
    /// Total length outside 2..=3 characters.
    #[display("Notation {:?} must be 2 or 3 characters long", _0)]
    Length(String),

    /// First character is not `A`..`Z`.
    #[display("Notation {:?} must start with a row letter A-Z", _0)]
    Row(String),

    /// Column part is not a number from 1 upwards.
    #[display("Notation {:?} must end with a column number starting at 1", _0)]
    Column(String),
}

impl std::error::Error for NotationError {}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum MoveError {
    /// The notation could not be decoded.
    #[display("Invalid notation: {}", _0)]
    InvalidNotation(NotationError),

    /// The coordinate lies outside the grid.
    #[display("Square {:?} is outside the board", _0)]
    #[from(ignore)]
    OutOfBounds(Coordinate),

    /// The square at the coordinate is already occupied.
    #[display("Square {:?} is already occupied", _0)]
    #[from(ignore)]
    SquareOccupied(Coordinate),
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::InvalidNotation(err) => Some(err),
            _ => None,
        }
    }
}
