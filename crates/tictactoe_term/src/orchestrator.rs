//! Game orchestration between the human and the computer.

use crate::players::{ComputerPlayer, HumanPlayer};
use crate::ui::{format_moves, render_board};
use crate::{Console, Game, GameConfig, Outcome, Phase};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

const COMPUTER_PROMPT: &str = "Press <ENTER> to show computer's move...";

/// Runs one game from intro banner to final message.
#[derive(Debug)]
pub struct Orchestrator<R, W> {
    game: Game,
    human: HumanPlayer,
    computer: ComputerPlayer,
    console: Console<R, W>,
    script: Vec<String>,
    rendered: bool,
}

impl<R: BufRead, W: Write> Orchestrator<R, W> {
    /// Creates an orchestrator for the configured game.
    ///
    /// The intro banner lists the moves still scripted in `computer`.
    pub fn new(config: &GameConfig, computer: ComputerPlayer, console: Console<R, W>) -> Self {
        let script = computer.remaining_script().to_vec();
        Self {
            game: Game::new(config),
            human: HumanPlayer::new(),
            computer,
            console,
            script,
            rendered: false,
        }
    }

    /// Returns the game as it currently stands.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Gives back the console.
    pub fn into_console(self) -> Console<R, W> {
        self.console
    }

    /// Runs the turn loop until the game is over.
    #[instrument(skip(self))]
    pub fn run(&mut self) -> Result<Outcome> {
        info!("Starting game orchestration");
        self.intro()?;
        self.show_board()?;

        loop {
            match self.game.phase() {
                Phase::Terminal(outcome) => {
                    info!(%outcome, moves = self.game.history().len(), "Game over");
                    self.console.println(&outcome.to_string())?;
                    return Ok(outcome);
                }
                Phase::PlayerTurn => {
                    debug!("Waiting for player move");
                    let notation = self.human.read_move(&mut self.console, self.game.board())?;
                    self.game.play_player_move(&notation)?;
                }
                Phase::ComputerTurn => {
                    self.console.prompt(COMPUTER_PROMPT)?;
                    let coordinate = self
                        .computer
                        .choose_move(self.game.board())
                        .context("No empty square left for the computer")?;
                    self.game.play_computer_move(coordinate)?;
                }
            }
            self.show_board()?;
        }
    }

    fn intro(&mut self) -> Result<()> {
        self.console.println("Welcome!")?;
        if !self.script.is_empty() {
            self.console.println(&format!(
                "Computer will make the following moves: {}",
                format_moves(&self.script)
            ))?;
        }
        self.console.println(&format!(
            "Player is {}, Computer is {}\n",
            self.game.player(),
            self.game.computer()
        ))
    }

    /// Draws the board, clearing the previous drawing first.
    fn show_board(&mut self) -> Result<()> {
        if self.rendered {
            self.console.clear()?;
        }
        self.rendered = true;
        self.console.println(&render_board(self.game.board()))
    }
}
