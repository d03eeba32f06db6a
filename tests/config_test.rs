//! Tests for config file loading.

use std::io::Write;
use std::path::PathBuf;
use tictac::AppConfig;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = AppConfig::load(dir.path().join("absent.toml")).expect("defaults");

    let defaults = AppConfig::default();
    assert_eq!(config.log_file(), defaults.log_file());
    assert_eq!(
        defaults.credits_url(),
        "http://api.tvmaze.com/people/1/castcredits"
    );
}

#[test]
fn test_file_overrides_fields() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, r#"credits_url = "http://localhost:9000/credits""#).expect("write");
    writeln!(file, r#"log_file = "/tmp/tictac-test.log""#).expect("write");

    let config = AppConfig::from_file(file.path()).expect("valid config");

    assert_eq!(config.credits_url(), "http://localhost:9000/credits");
    assert_eq!(config.log_file(), &PathBuf::from("/tmp/tictac-test.log"));
}

#[test]
fn test_partial_file_keeps_other_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, r#"log_file = "game.log""#).expect("write");

    let config = AppConfig::from_file(file.path()).expect("valid config");

    assert_eq!(config.log_file(), &PathBuf::from("game.log"));
    assert_eq!(config.credits_url(), AppConfig::default().credits_url());
}

#[test]
fn test_invalid_toml_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "credits_url = [").expect("write");

    let err = AppConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}
