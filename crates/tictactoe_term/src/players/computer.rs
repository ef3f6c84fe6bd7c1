//! Computer opponent: predetermined moves first, random moves after.

use super::random;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_board::{Board, Coordinate};
use tracing::{debug, instrument};

/// Computer player driven by a script of algebraic moves.
///
/// Each scripted move is tried at most once, in order. A move that is not
/// valid on the current board is skipped. Once the script is used up the
/// computer picks a random empty square.
#[derive(Debug)]
pub struct ComputerPlayer {
    script: Vec<String>,
    cursor: usize,
    rng: StdRng,
}

impl ComputerPlayer {
    /// Creates a computer player seeded from the operating system.
    pub fn new(script: Vec<String>) -> Self {
        Self {
            script,
            cursor: 0,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a computer player with a reproducible random fallback.
    pub fn with_seed(script: Vec<String>, seed: u64) -> Self {
        Self {
            script,
            cursor: 0,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Scripted moves not yet tried.
    pub fn remaining_script(&self) -> &[String] {
        &self.script[self.cursor..]
    }

    /// Chooses the next move, `None` only on a full board.
    #[instrument(skip_all, fields(cursor = self.cursor))]
    pub fn choose_move(&mut self, board: &Board) -> Option<Coordinate> {
        if let Some(coordinate) = self.next_scripted(board) {
            return Some(coordinate);
        }
        let coordinate = random::pick_move(board, &mut self.rng);
        debug!(square = ?coordinate.and_then(|c| c.to_algebraic()), "Computer chose random square");
        coordinate
    }

    fn next_scripted(&mut self, board: &Board) -> Option<Coordinate> {
        while let Some(notation) = self.script.get(self.cursor) {
            self.cursor += 1;
            match board.validate_move(notation) {
                Ok(coordinate) => {
                    debug!(%notation, "Computer plays scripted move");
                    return Some(coordinate);
                }
                Err(e) => debug!(%notation, error = %e, "Skipping scripted move"),
            }
        }
        None
    }
}
