// Settings Tests - Testing Settings defaults, validation and persistence

use crate::storage::{ResolutionPolicy, Settings};
use crate::Error;
use std::time::Duration;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_settings_default() {
    let settings = Settings::default();

    assert_eq!(settings.match_delay_ms, 600);
    assert_eq!(settings.min_exact_matches, 5);
    assert_eq!(settings.padded_deck_size, 10);
    assert_eq!(settings.resolution_policy, ResolutionPolicy::LastConfirmationWins);
    assert!(settings.enable_notifications);
    assert_eq!(settings.match_delay(), Duration::from_millis(600));
    assert!(settings.validate().is_ok());
}

#[test]
fn test_settings_validate() {
    let settings = Settings {
        padded_deck_size: 0,
        min_exact_matches: 0,
        ..Settings::default()
    };
    assert!(matches!(settings.validate(), Err(Error::InvalidSetting(_))));

    let settings = Settings {
        min_exact_matches: 11,
        ..Settings::default()
    };
    assert!(matches!(settings.validate(), Err(Error::InvalidSetting(_))));
}

#[test]
fn test_settings_save_and_load() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    let path = temp_file.path();

    let settings = Settings {
        match_delay_ms: 250,
        resolution_policy: ResolutionPolicy::LatestLikeWins,
        ..Settings::default()
    };
    settings.save(path).expect("Failed to save settings");

    let loaded = Settings::load(path).expect("Failed to load settings");
    assert_eq!(loaded, settings);
}

#[test]
fn test_settings_load_missing_file_returns_default() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let loaded = Settings::load(dir.path().join("missing.json")).expect("load");
    assert_eq!(loaded, Settings::default());
}

#[test]
fn test_settings_load_empty_file_returns_default() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(temp_file.path(), "  \n").expect("write");

    let loaded = Settings::load(temp_file.path()).expect("load");
    assert_eq!(loaded, Settings::default());
}

#[test]
fn test_settings_partial_file_uses_defaults() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(
        temp_file.path(),
        r#"{ "match_delay_ms": 50, "resolution_policy": "latest_like_wins" }"#,
    )
    .expect("write");

    let loaded = Settings::load(temp_file.path()).expect("load");
    assert_eq!(loaded.match_delay_ms, 50);
    assert_eq!(loaded.resolution_policy, ResolutionPolicy::LatestLikeWins);
    assert_eq!(loaded.padded_deck_size, 10);
}

#[test]
fn test_settings_load_rejects_garbage() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(temp_file.path(), "{ not json").expect("write");

    assert!(matches!(
        Settings::load(temp_file.path()),
        Err(Error::Storage(_))
    ));
}

#[test]
fn test_settings_load_rejects_invalid_values() {
    let temp_file = NamedTempFile::new().expect("Failed to create temp file");
    std::fs::write(temp_file.path(), r#"{ "padded_deck_size": 0 }"#).expect("write");

    assert!(matches!(
        Settings::load(temp_file.path()),
        Err(Error::InvalidSetting(_))
    ));
}

#[test]
fn test_settings_save_creates_parent_dirs() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("nested").join("cohesa.json");

    Settings::default().save(&path).expect("save");
    assert!(path.exists());
}
