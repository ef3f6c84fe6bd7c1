//! Pure tic-tac-toe board model.
//!
//! Converts between board strings, row-major squares, coordinates and
//! algebraic notation, validates moves, and detects wins and full boards.
//! Nothing here performs I/O and no board is ever mutated in place.
//!
//! # Example
//!
//! ```
//! use tictactoe_board::{Board, Player};
//!
//! let board = Board::from_string("XX OO    ").unwrap();
//! assert!(board.is_valid_move("A3"));
//!
//! let next = board.place_letter(Player::X, "A3").unwrap();
//! assert_eq!(next.winner(), Some(Player::X));
//! assert_eq!(board.winner(), None);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod notation;
pub mod rules;
mod types;

pub use board::Board;
pub use error::{BoardFormatError, MoveError, NotationError};
pub use notation::row_letter;
pub use types::{Coordinate, Player, Square};
