//! Algebraic move notation: a row letter followed by a 1-indexed column number.
//!
//! `"A1"` is the top-left square, `"C14"` is row 2, column 13. The decoder
//! only checks the shape of the notation; whether the square exists on a
//! given board is checked by [`Board::validate_move`](crate::Board::validate_move).

use crate::{Coordinate, NotationError};
use std::str::FromStr;
use tracing::instrument;

const ROW_LETTERS: std::ops::RangeInclusive<u8> = b'A'..=b'Z';

impl Coordinate {
    /// Decodes algebraic notation into a coordinate.
    #[instrument]
    pub fn from_algebraic(notation: &str) -> Result<Self, NotationError> {
        let bytes = notation.as_bytes();
        if !(2..=3).contains(&bytes.len()) {
            return Err(NotationError::Length(notation.to_string()));
        }

        let letter = bytes[0];
        if !ROW_LETTERS.contains(&letter) {
            return Err(NotationError::Row(notation.to_string()));
        }

        // Row letter is ASCII, so the remainder starts on a char boundary.
        let digits = &notation[1..];
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(NotationError::Column(notation.to_string()));
        }
        let column: usize = digits
            .parse()
            .map_err(|_| NotationError::Column(notation.to_string()))?;
        if column == 0 {
            return Err(NotationError::Column(notation.to_string()));
        }

        Ok(Coordinate::new((letter - b'A') as usize, column - 1))
    }

    /// Encodes this coordinate as algebraic notation, `None` past row `Z`.
    pub fn to_algebraic(&self) -> Option<String> {
        let letter = u8::try_from(self.row)
            .ok()
            .and_then(|row| b'A'.checked_add(row))
            .filter(|letter| ROW_LETTERS.contains(letter))?;
        Some(format!("{}{}", letter as char, self.col + 1))
    }
}

impl FromStr for Coordinate {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_algebraic(s)
    }
}

/// Returns the row letter for a 0-indexed row (`A` for 0), `?` past `Z`.
pub fn row_letter(row: usize) -> char {
    u8::try_from(row)
        .ok()
        .and_then(|row| b'A'.checked_add(row))
        .filter(|letter| ROW_LETTERS.contains(letter))
        .map(char::from)
        .unwrap_or('?')
}
