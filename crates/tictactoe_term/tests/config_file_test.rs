//! Tests for loading game configuration files.

use std::fs;
use tempfile::TempDir;

use tictactoe_board::Player;
use tictactoe_term::{ConfigErrorKind, GameConfig};

/// Writes `content` to a file in `dir` and returns its path.
fn write_config(dir: &TempDir, filename: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(filename);
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn test_loads_valid_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "game.json",
        r#"{
            "board": "X   O    ",
            "playerLetter": "O",
            "computerLetter": "X",
            "computerMoves": ["C3"]
        }"#,
    );

    let config = GameConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.board().to_board_string(), "X   O    ");
    assert_eq!(*config.player_letter(), Player::O);
    assert_eq!(config.computer_moves(), &vec!["C3".to_string()]);
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = GameConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert_eq!(err.kind, ConfigErrorKind::Load);
    assert!(err.message.contains("Failed to read config file"));
}

#[test]
fn test_malformed_file_is_load_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "broken.json", "{ board: ");
    let err = GameConfig::from_file(&path).unwrap_err();
    assert_eq!(err.kind, ConfigErrorKind::Load);
}

#[test]
fn test_missing_key_is_shape_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "partial.json",
        r#"{"board": "         ", "computerLetter": "O", "computerMoves": []}"#,
    );
    let err = GameConfig::from_file(&path).unwrap_err();
    assert_eq!(err.kind, ConfigErrorKind::Shape);
    assert!(err.message.contains("playerLetter"));
}

#[test]
fn test_full_board_is_shape_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "full.json",
        r#"{"board": "XOXOXXOXO", "playerLetter": "X", "computerLetter": "O", "computerMoves": []}"#,
    );
    let err = GameConfig::from_file(&path).unwrap_err();
    assert_eq!(err.kind, ConfigErrorKind::Shape);
}

#[test]
fn test_repository_default_config_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join(tictactoe_term::DEFAULT_CONFIG_PATH);
    let config = GameConfig::from_file(path).expect("Default config should load");
    assert!(config.player_moves_first());
}
