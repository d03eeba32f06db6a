//! Tests for the tictac binary's subcommands.

use std::io::Write;
use std::process::{Command, Output};

fn tictac(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tictac"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("tictac runs")
}

fn broken_config() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "credits_url = [").expect("write");
    file
}

#[test]
fn test_replay_prints_board_and_winner() {
    let output = tictac(&["replay", "1", "2", "5", "3", "9"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("X|O|O"), "{}", stdout);
    assert!(
        stdout.contains("Player 1 wins (diagonal-left 1-5-9)"),
        "{}",
        stdout
    );
}

#[test]
fn test_replay_ignores_broken_config() {
    let config = broken_config();
    let path = config.path().to_string_lossy().into_owned();

    let output = tictac(&["--config", &path, "replay", "1", "4", "2", "5", "3"]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Player 1 wins (row 1-2-3)"));
}

#[test]
fn test_replay_json_without_winner_is_null() {
    let output = tictac(&["replay", "--json", "5", "5"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "null");
}

#[test]
fn test_replay_rejects_out_of_range_tile() {
    let output = tictac(&["replay", "1", "10"]);
    assert!(!output.status.success());
}

#[test]
fn test_credits_reports_broken_config() {
    let config = broken_config();
    let path = config.path().to_string_lossy().into_owned();

    let output = tictac(&["--config", &path, "credits"]);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to parse config"));
}
