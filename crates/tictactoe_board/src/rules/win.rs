//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Square};
use tracing::instrument;

/// Checks if there is a winner on the board.
///
/// Lines are examined in a fixed order: every column left to right, every
/// row top to bottom, then the main diagonal and the anti-diagonal. The
/// diagonals only exist on square boards. The first line that is uniformly
/// occupied by one player wins; a uniformly empty line never does.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    let (rows, cols) = (board.rows(), board.cols());

    let columns = (0..cols)
        .find_map(|col| uniform_line(board, (0..rows).map(|row| (row, col))));
    if columns.is_some() {
        return columns;
    }

    let rows_winner = (0..rows)
        .find_map(|row| uniform_line(board, (0..cols).map(|col| (row, col))));
    if rows_winner.is_some() {
        return rows_winner;
    }

    if rows != cols {
        return None;
    }
    let size = rows;

    uniform_line(board, (0..size).map(|i| (i, i)))
        // Anti-diagonal: (0, N-1), (1, N-2), ..., (N-1, 0).
        .or_else(|| uniform_line(board, (0..size).map(|i| (i, size - 1 - i))))
}

/// Returns the player occupying every square of the line, if any.
fn uniform_line(board: &Board, mut line: impl Iterator<Item = (usize, usize)>) -> Option<Player> {
    let (row, col) = line.next()?;
    let player = board.get(row, col)?.player()?;
    line.all(|(row, col)| board.get(row, col) == Some(Square::Occupied(player)))
        .then_some(player)
}
