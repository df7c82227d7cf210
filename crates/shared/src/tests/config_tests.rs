use super::*;

use std::{collections::HashMap, io::Write};

fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn file_values_override_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "lockers = 36\nspeed = 900\nlog_filter = \"debug\"").expect("write");

    let settings = load_settings_from(Some(file.path())).expect("settings");
    assert_eq!(settings.lockers, 36);
    assert_eq!(settings.speed, 900);
    assert_eq!(settings.log_filter, "debug");
}

#[test]
fn partial_file_keeps_remaining_defaults() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "lockers = 9").expect("write");

    let settings = load_settings_from(Some(file.path())).expect("settings");
    assert_eq!(settings.lockers, 9);
    assert_eq!(settings.speed, Settings::default().speed);
}

#[test]
fn zero_lockers_is_raised_to_one() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "lockers = 0").expect("write");

    let settings = load_settings_from(Some(file.path())).expect("settings");
    assert_eq!(settings.lockers, 1);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = load_settings_from(Some(&dir.path().join("absent.toml"))).expect_err("missing");
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn unknown_keys_are_rejected() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    writeln!(file, "lokers = 9").expect("write");

    let err = load_settings_from(Some(file.path())).expect_err("typo");
    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn env_overrides_apply_and_invalid_values_are_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env_of(&[
            ("NUMVIZ__LOCKERS", "100"),
            ("NUMVIZ__SPEED", "fast"),
            ("NUMVIZ__LOG_FILTER", "lockers=debug"),
        ]),
    );
    assert_eq!(settings.lockers, 100);
    assert_eq!(settings.speed, Settings::default().speed);
    assert_eq!(settings.log_filter, "lockers=debug");
}
