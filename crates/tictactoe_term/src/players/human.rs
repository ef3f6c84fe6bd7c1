//! Human player reading moves from the console.

use crate::Console;
use anyhow::Result;
use std::io::{BufRead, Write};
use tictactoe_board::Board;
use tracing::{debug, instrument};

const MOVE_PROMPT: &str = "What's your move?\n";
const RETRY_MESSAGE: &str = "Invalid move. Try again.";

/// Human player typing moves in algebraic notation.
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanPlayer;

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new() -> Self {
        Self
    }

    /// Prompts until the human enters a valid move and returns its notation.
    ///
    /// Malformed notation, squares off the board and occupied squares are
    /// all answered with a retry prompt.
    #[instrument(skip_all)]
    pub fn read_move<R: BufRead, W: Write>(
        &self,
        console: &mut Console<R, W>,
        board: &Board,
    ) -> Result<String> {
        loop {
            let answer = console.prompt(MOVE_PROMPT)?;
            match board.validate_move(&answer) {
                Ok(coordinate) => {
                    debug!(%answer, ?coordinate, "Accepted move");
                    return Ok(answer);
                }
                Err(e) => {
                    debug!(%answer, error = %e, "Rejected move");
                    console.println(RETRY_MESSAGE)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_retries_until_valid() {
        let board = Board::from_string("X        ").unwrap();
        let mut console = Console::new(Cursor::new("a1\nA1\nA9\nB2\n"), Vec::new());

        let notation = HumanPlayer::new().read_move(&mut console, &board).unwrap();
        assert_eq!(notation, "B2");

        let (_, output) = console.into_inner();
        let output = String::from_utf8(output).unwrap();
        assert_eq!(output.matches(RETRY_MESSAGE).count(), 3);
        assert_eq!(output.matches("What's your move?").count(), 4);
    }

    #[test]
    fn test_end_of_input_is_error() {
        let board = Board::new(3);
        let mut console = Console::new(Cursor::new("Q7\n"), Vec::new());
        assert!(HumanPlayer::new().read_move(&mut console, &board).is_err());
    }
}
