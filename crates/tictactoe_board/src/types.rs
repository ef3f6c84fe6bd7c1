//! Core domain types for the board model.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A mark that can occupy a square.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (moves first).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Character used for this mark in board strings.
    pub fn as_char(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Character used for the empty square in board strings.
    pub const EMPTY_CHAR: char = ' ';

    /// Decodes a board-string character, `None` for anything but `' '`, `'X'` or `'O'`.
    pub fn from_char(c: char) -> Option<Self> {
        if c == Self::EMPTY_CHAR {
            return Some(Square::Empty);
        }
        Player::iter()
            .find(|player| player.as_char() == c)
            .map(Square::Occupied)
    }

    /// Encodes this square as a board-string character.
    pub fn as_char(self) -> char {
        match self {
            Square::Empty => Self::EMPTY_CHAR,
            Square::Occupied(player) => player.as_char(),
        }
    }

    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Checks if the square is empty.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }
}

impl From<Player> for Square {
    fn from(player: Player) -> Self {
        Square::Occupied(player)
    }
}

/// A 0-indexed (row, column) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Coordinate {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}
