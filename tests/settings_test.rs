//! Tests for settings file loading.

use std::io::Write;
use std::path::PathBuf;
use timetravel_tictactoe::Settings;

#[test]
fn test_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_or_default(dir.path().join("absent.toml")).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(*settings.tick_rate_ms(), 100);
}

#[test]
fn test_file_overrides_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "log_file = \"/tmp/ttt.log\"\nlog_filter = \"debug\"\nshow_coordinates = false"
    )
    .unwrap();

    let settings = Settings::from_file(file.path()).unwrap();
    assert_eq!(settings.log_file(), &PathBuf::from("/tmp/ttt.log"));
    assert_eq!(settings.log_filter(), "debug");
    assert!(!*settings.show_coordinates());
    assert_eq!(*settings.tick_rate_ms(), 100);
}

#[test]
fn test_invalid_toml_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tick_rate_ms = \"fast\"").unwrap();

    let err = Settings::load_or_default(file.path()).unwrap_err();
    assert!(err.message.starts_with("Failed to parse config"));
}

#[test]
fn test_zero_tick_rate_rejected() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "tick_rate_ms = 0").unwrap();

    assert!(Settings::from_file(file.path()).is_err());
}
