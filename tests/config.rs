//! Configuration system tests
//!
//! Tests for config paths, settings and keys file persistence.

mod common;

use std::fs;

use common::{defaults_text, saved, write_file};
use vkeys::config::Settings;
use vkeys::config_paths;
use vkeys::keymap::{dump_defaults_file, KeyCode, Keymap, LoadIssueKind, VirtualKey};

// ========================================================================
// Config Paths Tests
// ========================================================================

#[test]
fn test_config_dir_contains_app_name() {
    if let Some(dir) = config_paths::config_dir() {
        assert!(dir.to_string_lossy().contains("vkeys"));
    }
}

#[test]
fn test_keys_file_is_inside_config_dir() {
    if let (Some(dir), Some(keys)) = (config_paths::config_dir(), config_paths::keys_file()) {
        assert!(keys.starts_with(&dir));
        assert!(keys.ends_with("keys"));
    }
}

#[test]
fn test_config_file_ends_with_yaml() {
    if let Some(path) = config_paths::config_file() {
        assert!(path.to_string_lossy().ends_with("config.yaml"));
    }
}

// ========================================================================
// Settings Tests
// ========================================================================

#[test]
fn test_settings_missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let settings = Settings::load_from(&dir.path().join("config.yaml"));
    assert_eq!(settings, Settings::default());
}

#[test]
fn test_settings_unparseable_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "config.yaml", "legend_columns: [not a number\n");
    assert_eq!(Settings::load_from(&path), Settings::default());
}

#[test]
fn test_settings_save_load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.yaml");
    let settings = Settings {
        keys_file: Some(dir.path().join("my-keys")),
        legend_columns: 4,
    };

    settings.save_to(&path).unwrap();
    assert_eq!(Settings::load_from(&path), settings);
}

#[test]
fn test_settings_zero_columns_fall_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "config.yaml", "legend_columns: 0\n");
    assert_eq!(Settings::load_from(&path).legend_columns, 6);
}

// ========================================================================
// Keys File Tests
// ========================================================================

#[test]
fn test_load_or_create_writes_defaults_on_first_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("vkeys").join("keys");

    let (keymap, report) = Keymap::load_or_create(&path).unwrap();
    assert!(report.is_clean());
    assert!(path.exists());
    assert_eq!(fs::read_to_string(&path).unwrap(), defaults_text());
    assert!(!keymap.check_missing());
    assert_eq!(keymap.lookup(keymap.code_of("q")), Some(VirtualKey::Quit));
}

#[test]
fn test_load_or_create_fills_missing_actions() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "keys",
        "# partial\ngeneric-quit  Z\ngeneric-help  UNDEFINED\n",
    );

    let (keymap, report) = Keymap::load_or_create(&path).unwrap();
    assert!(report.is_clean());
    assert_eq!(report.assigned, 1);
    assert_eq!(keymap.all_keys(VirtualKey::Quit), "Z ");
    assert!(keymap.is_undefined(VirtualKey::Help));
    assert_eq!(keymap.all_keys(VirtualKey::Save), "s S ^S ");
    assert!(!keymap.check_missing());
}

#[test]
fn test_load_or_create_reports_problems() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "keys",
        "generic-fly  f\ngeneric-quit\ngeneric-help  ?\ngeneric-credits  ?\n",
    );

    let (keymap, report) = Keymap::load_or_create(&path).unwrap();
    let kinds: Vec<_> = report.issues.iter().map(|i| (i.line, &i.kind)).collect();
    assert_eq!(kinds.len(), 3);
    assert_eq!(kinds[0], (1, &LoadIssueKind::UnknownAction("generic-fly".into())));
    assert_eq!(kinds[1], (2, &LoadIssueKind::NoKeys(VirtualKey::Quit)));
    assert!(matches!(
        kinds[2],
        (4, LoadIssueKind::Conflict { action: VirtualKey::Credits, conflict })
            if conflict.owner == VirtualKey::Help
    ));

    // Actions whose lines failed fall back to their defaults
    assert_eq!(keymap.all_keys(VirtualKey::Quit), "q Q ");
    assert_eq!(keymap.all_keys(VirtualKey::Credits), "@ ");
}

#[test]
fn test_load_or_create_falls_back_when_file_takes_a_default_key() {
    let dir = tempfile::tempdir().unwrap();
    // `q` is a default key of generic-quit, which the file leaves missing
    let path = write_file(dir.path(), "keys", "generic-help  q\n");

    let (keymap, report) = Keymap::load_or_create(&path).unwrap();
    assert!(report.issues.is_empty());
    assert!(!report.is_clean());
    let rejected = report.rejected.unwrap();
    assert_eq!(rejected.action, VirtualKey::Quit);
    assert_eq!(rejected.error.conflict().unwrap().owner, VirtualKey::Help);

    assert_eq!(keymap.all_keys(VirtualKey::Help), "? ");
    assert_eq!(keymap.all_keys(VirtualKey::Quit), "q Q ");
    assert!(!keymap.check_missing());
}

#[test]
fn test_nonsense_key_name_round_trips_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "keys", "generic-quit  NOSUCHKEY\n");

    let (keymap, report) = Keymap::load_or_create(&path).unwrap();
    assert_eq!(report.issues.len(), 1);
    assert!(report.rejected.is_none());
    assert_eq!(keymap.all_keys(VirtualKey::Quit), "q Q ");

    let saved_path = dir.path().join("saved");
    keymap.save_file(&saved_path).unwrap();
    let (reloaded, report) = Keymap::load_or_create(&saved_path).unwrap();
    assert!(report.is_clean());
    assert_eq!(saved(&reloaded), saved(&keymap));
    assert_eq!(
        reloaded.lookup(reloaded.code_of("N")),
        Some(VirtualKey::EditNote)
    );
}

#[test]
fn test_save_file_load_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keys");

    let mut keymap = Keymap::with_defaults().unwrap();
    let f5 = keymap.code_of("F5");
    keymap.assign(f5, VirtualKey::Reload).unwrap();
    keymap.assign(KeyCode::from_char('é'), VirtualKey::EditNote).unwrap();
    let question = keymap.code_of("?");
    keymap.remove(question, VirtualKey::Help);
    keymap.save_file(&path).unwrap();

    let mut loaded = Keymap::new();
    let report = loaded.load_file(&path).unwrap();
    assert!(report.is_clean());
    assert_eq!(saved(&loaded), saved(&keymap));
    assert_eq!(loaded.lookup(f5), Some(VirtualKey::Reload));
    assert_eq!(
        loaded.lookup(KeyCode::from_char('é')),
        Some(VirtualKey::EditNote)
    );
    assert!(loaded.is_undefined(VirtualKey::Help));
}

#[test]
fn test_dump_defaults_file_loads_without_missing_actions() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("keys");
    dump_defaults_file(&path).unwrap();

    let mut keymap = Keymap::new();
    let report = keymap.load_file(&path).unwrap();
    assert!(report.is_clean());
    assert!(!keymap.check_missing());
    assert!(!keymap.check_undefined());
}

#[test]
fn test_legacy_aliases_load() {
    let mut keymap = Keymap::new();
    let report = keymap.load_str("view-item  ^J\nmove-left  KEY_HOME\nmove-right  KEY_END\n");
    assert!(report.is_clean());
    assert_eq!(keymap.lookup(KeyCode::RETURN), Some(VirtualKey::ViewItem));
    assert_eq!(keymap.lookup(KeyCode::HOME), Some(VirtualKey::MoveLeft));
    assert_eq!(keymap.lookup(KeyCode::END), Some(VirtualKey::MoveRight));
}

#[test]
fn test_load_file_missing_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut keymap = Keymap::new();
    assert!(keymap.load_file(&dir.path().join("nope")).is_err());
}
