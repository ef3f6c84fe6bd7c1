//! Turn state machine for one game between the human and the computer.
//!
//! `Setup` happens in [`Game::new`]; afterwards the game is always in one of
//! the [`Phase`] variants. Every accepted move replaces the current board
//! with a new value and recomputes the phase.

use crate::{GameConfig, TurnError};
use tictactoe_board::{Board, Coordinate, MoveError, Player, Square};
use tracing::{debug, info, instrument};

/// How a finished game ended, from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Outcome {
    /// The human completed a line.
    #[strum(to_string = "You win!")]
    PlayerWins,
    /// The computer completed a line.
    #[strum(to_string = "Computer wins!")]
    ComputerWins,
    /// Board full with no line.
    #[strum(to_string = "It's a draw!")]
    Draw,
}

/// Current phase of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Waiting for the human's move.
    PlayerTurn,
    /// Waiting for the computer's move.
    ComputerTurn,
    /// The game is over.
    Terminal(Outcome),
}

impl Phase {
    /// Returns the outcome once the game is over.
    pub fn outcome(self) -> Option<Outcome> {
        match self {
            Phase::Terminal(outcome) => Some(outcome),
            Phase::PlayerTurn | Phase::ComputerTurn => None,
        }
    }
}

/// A single game in progress or finished.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    player: Player,
    computer: Player,
    phase: Phase,
    history: Vec<(Player, Coordinate)>,
}

impl Game {
    /// Sets up a game from a validated configuration.
    ///
    /// The human moves first when playing `X`. A starting board that already
    /// holds a line is terminal straight away.
    #[instrument(skip(config))]
    pub fn new(config: &GameConfig) -> Self {
        let first = if config.player_moves_first() {
            Phase::PlayerTurn
        } else {
            Phase::ComputerTurn
        };

        let mut game = Self {
            board: config.board().clone(),
            player: *config.player_letter(),
            computer: *config.computer_letter(),
            phase: first,
            history: Vec::new(),
        };
        if let Some(outcome) = game.outcome() {
            game.phase = Phase::Terminal(outcome);
        }
        info!(phase = ?game.phase, "Game set up");
        game
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The human's mark.
    pub fn player(&self) -> Player {
        self.player
    }

    /// The computer's mark.
    pub fn computer(&self) -> Player {
        self.computer
    }

    /// Moves played so far, oldest first.
    pub fn history(&self) -> &[(Player, Coordinate)] {
        &self.history
    }

    /// Applies the human's move given in algebraic notation.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn play_player_move(&mut self, notation: &str) -> Result<Phase, TurnError> {
        if self.phase != Phase::PlayerTurn {
            return Err(TurnError::WrongTurn(self.phase));
        }
        let coordinate = self.board.validate_move(notation)?;
        self.apply(self.player, coordinate, Phase::ComputerTurn)
    }

    /// Applies the computer's move.
    #[instrument(skip(self), fields(phase = ?self.phase))]
    pub fn play_computer_move(&mut self, coordinate: Coordinate) -> Result<Phase, TurnError> {
        if self.phase != Phase::ComputerTurn {
            return Err(TurnError::WrongTurn(self.phase));
        }
        match self.board.get(coordinate.row, coordinate.col) {
            None => return Err(MoveError::OutOfBounds(coordinate).into()),
            Some(Square::Occupied(_)) => return Err(MoveError::SquareOccupied(coordinate).into()),
            Some(Square::Empty) => {}
        }
        self.apply(self.computer, coordinate, Phase::PlayerTurn)
    }

    fn apply(
        &mut self,
        mark: Player,
        coordinate: Coordinate,
        next: Phase,
    ) -> Result<Phase, TurnError> {
        self.board = self.board.set_cell(mark, coordinate.row, coordinate.col)?;
        self.history.push((mark, coordinate));

        self.phase = match self.outcome() {
            Some(outcome) => Phase::Terminal(outcome),
            None => next,
        };
        debug!(%mark, ?coordinate, phase = ?self.phase, "Move applied");
        Ok(self.phase)
    }

    /// Terminal check: a line for either side, otherwise a full board.
    fn outcome(&self) -> Option<Outcome> {
        match self.board.winner() {
            Some(mark) if mark == self.player => Some(Outcome::PlayerWins),
            Some(_) => Some(Outcome::ComputerWins),
            None if self.board.is_full() => Some(Outcome::Draw),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(board: &str, player: Player) -> GameConfig {
        GameConfig::new(board, player, player.opponent(), vec![]).unwrap()
    }

    #[test]
    fn test_first_turn_follows_letter() {
        assert_eq!(Game::new(&config("         ", Player::X)).phase(), Phase::PlayerTurn);
        assert_eq!(Game::new(&config("         ", Player::O)).phase(), Phase::ComputerTurn);
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = Game::new(&config("         ", Player::X));
        assert_eq!(game.play_player_move("B2"), Ok(Phase::ComputerTurn));
        assert_eq!(
            game.play_computer_move(Coordinate::new(0, 0)),
            Ok(Phase::PlayerTurn)
        );
        assert_eq!(game.board().to_board_string(), "O   X    ");
        assert_eq!(game.history().len(), 2);
    }

    #[test]
    fn test_wrong_turn_rejected() {
        let mut game = Game::new(&config("         ", Player::X));
        assert_eq!(
            game.play_computer_move(Coordinate::new(0, 0)),
            Err(TurnError::WrongTurn(Phase::PlayerTurn))
        );
    }

    #[test]
    fn test_invalid_player_move_keeps_turn() {
        let mut game = Game::new(&config("X   O    ", Player::X));
        assert!(matches!(
            game.play_player_move("A1"),
            Err(TurnError::Move(MoveError::SquareOccupied(_)))
        ));
        assert!(matches!(
            game.play_player_move("a1"),
            Err(TurnError::Move(MoveError::InvalidNotation(_)))
        ));
        assert!(matches!(
            game.play_player_move("A4"),
            Err(TurnError::Move(MoveError::OutOfBounds(_)))
        ));
        assert_eq!(game.phase(), Phase::PlayerTurn);
        assert_eq!(game.board().to_board_string(), "X   O    ");
    }

    #[test]
    fn test_player_win() {
        let mut game = Game::new(&config("XX OO    ", Player::X));
        assert_eq!(
            game.play_player_move("A3"),
            Ok(Phase::Terminal(Outcome::PlayerWins))
        );
        assert!(game.play_player_move("C1").is_err());
    }

    #[test]
    fn test_computer_win() {
        let mut game = Game::new(&config("XX OO X  ", Player::O));
        assert_eq!(game.phase(), Phase::ComputerTurn);
        assert_eq!(
            game.play_computer_move(Coordinate::new(0, 2)),
            Ok(Phase::Terminal(Outcome::ComputerWins))
        );
    }

    #[test]
    fn test_draw() {
        let mut game = Game::new(&config("OXOXOOXO ", Player::X));
        assert_eq!(
            game.play_player_move("C3"),
            Ok(Phase::Terminal(Outcome::Draw))
        );
        assert_eq!(Phase::Terminal(Outcome::Draw).outcome(), Some(Outcome::Draw));
    }

    #[test]
    fn test_already_won_board_is_terminal() {
        let game = Game::new(&config("XXXOO    ", Player::O));
        assert_eq!(game.phase(), Phase::Terminal(Outcome::ComputerWins));
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::PlayerWins.to_string(), "You win!");
        assert_eq!(Outcome::ComputerWins.to_string(), "Computer wins!");
        assert_eq!(Outcome::Draw.to_string(), "It's a draw!");
    }
}
