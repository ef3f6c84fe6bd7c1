//! Full games played through the orchestrator with in-memory I/O.

use std::io::Cursor;

use tictactoe_term::{ComputerPlayer, Console, GameConfig, Orchestrator, Outcome};

/// Every square of a 3x3 board, enough times that any prompt finds a free one.
fn cycling_input() -> String {
    "A1\nA2\nA3\nB1\nB2\nB3\nC1\nC2\nC3\n".repeat(12)
}

fn play(config: &GameConfig, input: &str, seed: u64) -> (Outcome, usize, String) {
    let console = Console::new(Cursor::new(input.to_string()), Vec::new());
    let computer = ComputerPlayer::with_seed(config.computer_moves().clone(), seed);
    let mut orchestrator = Orchestrator::new(config, computer, console);

    let outcome = orchestrator.run().expect("Game should finish");
    let moves = orchestrator.game().history().len();
    let (_, output) = orchestrator.into_console().into_inner();
    (outcome, moves, String::from_utf8(output).expect("UTF-8 output"))
}

#[test]
fn test_random_games_always_terminate() {
    let config = GameConfig::from_json(
        r#"{"board": "         ", "playerLetter": "X", "computerLetter": "O", "computerMoves": []}"#,
    )
    .unwrap();

    for seed in 0..200 {
        let (outcome, moves, output) = play(&config, &cycling_input(), seed);
        assert!(moves <= 9, "seed {seed} took {moves} moves");
        assert!(output.ends_with(&format!("{}\n", outcome)));
        match outcome {
            Outcome::Draw => assert_eq!(moves, 9),
            Outcome::PlayerWins | Outcome::ComputerWins => assert!(moves >= 5),
        }
    }
}

#[test]
fn test_random_games_with_computer_first() {
    let config = GameConfig::from_json(
        r#"{"board": "         ", "playerLetter": "O", "computerLetter": "X", "computerMoves": []}"#,
    )
    .unwrap();

    for seed in 0..50 {
        let (_, moves, output) = play(&config, &cycling_input(), seed);
        assert!(moves <= 9);
        assert!(output.contains("Player is O, Computer is X"));
    }
}

#[test]
fn test_scripted_moves_skip_taken_squares() {
    // The player takes B2 first, so the scripted B2 is skipped for A1.
    let config = GameConfig::from_json(
        r#"{"board": "         ", "playerLetter": "X", "computerLetter": "O", "computerMoves": ["B2", "A1"]}"#,
    )
    .unwrap();

    let input = format!("B2\n\n{}", cycling_input());
    let (_, moves, output) = play(&config, &input, 11);
    assert!(moves >= 2);
    assert!(output.contains("A | O |   |   |\n  -------------\nB |   | X |   |"));
}

#[test]
fn test_player_retries_are_reported() {
    let config = GameConfig::from_json(
        r#"{"board": "XX OO    ", "playerLetter": "X", "computerLetter": "O", "computerMoves": []}"#,
    )
    .unwrap();

    let (outcome, moves, output) = play(&config, "A1\nb3\nA33\nA3\n", 0);
    assert_eq!(outcome, Outcome::PlayerWins);
    assert_eq!(moves, 1);
    assert_eq!(output.matches("Invalid move. Try again.").count(), 3);
    assert!(output.ends_with("You win!\n"));
}
