//! Text rendering of the board.

use tictactoe_board::{Board, row_letter};

/// Renders the board with column numbers across the top and row letters down
/// the side.
///
/// ```text
///     1   2   3
///   -------------
/// A | X |   | O |
///   -------------
/// ```
pub fn render_board(board: &Board) -> String {
    let rule = format!("\n  -{}\n", "-".repeat(board.cols() * 4));

    let mut output = String::from("  ");
    for col in 1..=board.cols() {
        output.push_str(&format!("  {} ", col));
    }
    output.push_str(&rule);

    for row in 0..board.rows() {
        output.push_str(&format!("{} |", row_letter(row)));
        for col in 0..board.cols() {
            let square = board.get(row, col).unwrap_or_default();
            output.push_str(&format!(" {} |", square.as_char()));
        }
        output.push_str(&rule);
    }
    output
}

/// Comma-separated move list, as shown in the intro.
pub fn format_moves(moves: &[String]) -> String {
    moves.join(",")
}
