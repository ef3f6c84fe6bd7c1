//! The board: an immutable row-major grid of squares.
//!
//! Every operation that changes a square returns a new [`Board`] and leaves
//! the receiver untouched.

use crate::rules;
use crate::{BoardFormatError, Coordinate, MoveError, Player, Square};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// A rows x cols tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Squares in row-major order.
    squares: Vec<Square>,
}

impl Board {
    /// Creates a board of `rows` x `cols` squares, all set to `fill`.
    #[instrument]
    pub fn generate(rows: usize, cols: usize, fill: Square) -> Self {
        Self {
            rows,
            cols,
            squares: vec![fill; rows * cols],
        }
    }

    /// Creates an empty N x N board.
    pub fn new(size: usize) -> Self {
        Self::generate(size, size, Square::Empty)
    }

    /// Decodes a board string, `None` if it is not a valid N x N board.
    ///
    /// See the [`FromStr`] impl for the reason a string was rejected.
    pub fn from_string(s: &str) -> Option<Self> {
        s.parse().ok()
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of squares.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    /// True for a board with no squares.
    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Converts a coordinate to a row-major index.
    ///
    /// Pure arithmetic; range checks belong to [`Board::validate_move`].
    pub fn row_col_to_index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Converts a row-major index to a coordinate.
    ///
    /// `None` on a board with zero columns, where no index maps to a square.
    pub fn index_to_row_col(&self, index: usize) -> Option<Coordinate> {
        let row = index.checked_div(self.cols)?;
        let col = index.checked_rem(self.cols)?;
        Some(Coordinate::new(row, col))
    }

    /// True if the coordinate lies on the grid.
    pub fn contains(&self, coordinate: Coordinate) -> bool {
        coordinate.row < self.rows && coordinate.col < self.cols
    }

    /// Gets the square at `(row, col)`, `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<Square> {
        if self.contains(Coordinate::new(row, col)) {
            self.squares.get(self.row_col_to_index(row, col)).copied()
        } else {
            None
        }
    }

    /// Returns a copy of this board with `(row, col)` set to `player`.
    #[instrument(skip(self))]
    pub fn set_cell(&self, player: Player, row: usize, col: usize) -> Result<Self, MoveError> {
        let coordinate = Coordinate::new(row, col);
        if !self.contains(coordinate) {
            return Err(MoveError::OutOfBounds(coordinate));
        }

        let mut next = self.clone();
        let index = next.row_col_to_index(row, col);
        next.squares[index] = Square::Occupied(player);
        Ok(next)
    }

    /// Decodes `notation` and checks the square exists and is empty.
    #[instrument(skip(self))]
    pub fn validate_move(&self, notation: &str) -> Result<Coordinate, MoveError> {
        let coordinate = Coordinate::from_algebraic(notation)?;
        match self.get(coordinate.row, coordinate.col) {
            None => Err(MoveError::OutOfBounds(coordinate)),
            Some(Square::Occupied(_)) => Err(MoveError::SquareOccupied(coordinate)),
            Some(Square::Empty) => Ok(coordinate),
        }
    }

    /// True iff `notation` names an empty square on this board.
    pub fn is_valid_move(&self, notation: &str) -> bool {
        self.validate_move(notation).is_ok()
    }

    /// Returns a copy of this board with `player` placed at `notation`.
    ///
    /// Only the notation and the bounds are checked; an occupied square is
    /// overwritten. Use [`Board::validate_move`] first to refuse those.
    #[instrument(skip(self))]
    pub fn place_letter(&self, player: Player, notation: &str) -> Result<Self, MoveError> {
        let coordinate = Coordinate::from_algebraic(notation)?;
        debug!(?coordinate, %player, "Placing mark");
        self.set_cell(player, coordinate.row, coordinate.col)
    }

    /// Row-major indices of every empty square.
    pub fn empty_squares(&self) -> Vec<usize> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(_, square)| square.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    /// Checks for a winner on the board.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Concatenates the squares back into a board string.
    pub fn to_board_string(&self) -> String {
        self.squares.iter().map(|square| square.as_char()).collect()
    }
}

impl FromStr for Board {
    type Err = BoardFormatError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s
            .chars()
            .enumerate()
            .map(|(index, character)| {
                Square::from_char(character)
                    .ok_or(BoardFormatError::InvalidSquare { character, index })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if squares.is_empty() {
            return Err(BoardFormatError::Empty);
        }

        let size = squares.len().isqrt();
        if size * size != squares.len() {
            return Err(BoardFormatError::NotSquare(squares.len()));
        }

        Ok(Self {
            rows: size,
            cols: size,
            squares,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_board_string())
    }
}
