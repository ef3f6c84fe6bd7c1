//! Uniform random move selection.

use rand::Rng;
use tictactoe_board::{Board, Coordinate};

/// Picks an empty square uniformly at random, `None` on a full board.
pub fn pick_move<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Coordinate> {
    let empty = board.empty_squares();
    if empty.is_empty() {
        return None;
    }
    let index = empty[rng.random_range(0..empty.len())];
    board.index_to_row_col(index)
}
