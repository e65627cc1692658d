//! Tests for loading settings from disk.

use std::fs;
use std::path::PathBuf;

use keepalive::config::{load_from, Settings};
use keepalive::motion::MotionStyle;
use keepalive::ConfigError;

/// A settings file in the temp directory, removed on drop.
struct TempConfig(PathBuf);

impl TempConfig {
    fn with_contents(name: &str, contents: &str) -> Self {
        let path = std::env::temp_dir().join(format!(
            "keepalive-{}-{name}.json",
            std::process::id()
        ));
        fs::write(&path, contents).unwrap();
        Self(path)
    }
}

impl Drop for TempConfig {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

#[test]
fn missing_file_gives_defaults() {
    let path = std::env::temp_dir().join("keepalive-definitely-missing-config.json");
    let settings = load_from(&path).unwrap();
    assert_eq!(settings, Settings::default());
}

#[test]
fn empty_object_gives_defaults() {
    let file = TempConfig::with_contents("empty", "{}");
    assert_eq!(load_from(&file.0).unwrap(), Settings::default());
}

#[test]
fn partial_file_keeps_other_defaults() {
    let file = TempConfig::with_contents(
        "partial",
        r#"{ "timing": { "min_delay_ms": 10, "max_delay_ms": 20 } }"#,
    );
    let settings = load_from(&file.0).unwrap();

    assert_eq!(settings.timing.min_delay_ms, 10);
    assert_eq!(settings.timing.max_delay_ms, 20);
    assert_eq!(settings.timing.settle_after_move_ms, 400);
    assert_eq!(settings.motion, Settings::default().motion);
}

#[test]
fn motion_style_is_lowercase() {
    let file = TempConfig::with_contents(
        "linear",
        r#"{ "motion": { "style": "linear", "steps": 10 } }"#,
    );
    let settings = load_from(&file.0).unwrap();

    assert_eq!(settings.motion.style, MotionStyle::Linear);
    assert_eq!(settings.motion.steps, 10);
    assert_eq!(settings.motion.step_delay_ms, 4);
}

#[test]
fn icon_path_and_log_level_are_read() {
    let file = TempConfig::with_contents(
        "icon",
        r#"{ "icon_path": "/opt/keepalive/icon.png", "log_level": "debug" }"#,
    );
    let settings = load_from(&file.0).unwrap();

    assert_eq!(settings.icon_path, Some(PathBuf::from("/opt/keepalive/icon.png")));
    assert_eq!(settings.log_level.as_deref(), Some("debug"));
}

#[test]
fn loaded_settings_are_validated() {
    let file = TempConfig::with_contents(
        "invalid-values",
        r#"{ "timing": { "min_delay_ms": 900, "max_delay_ms": 100, "cancel_poll_ms": 0 },
             "motion": { "steps": 0 } }"#,
    );
    let settings = load_from(&file.0).unwrap();

    assert_eq!(settings.timing.max_delay_ms, 900);
    assert_eq!(settings.timing.cancel_poll_ms, 1);
    assert_eq!(settings.motion.steps, 1);
}

#[test]
fn malformed_json_is_a_parse_error() {
    let file = TempConfig::with_contents("malformed", "{ timing: nope");
    let err = load_from(&file.0).unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("malformed"));
}

#[test]
fn wrong_type_is_a_parse_error() {
    let file = TempConfig::with_contents("wrong-type", r#"{ "motion": { "steps": "many" } }"#);
    assert!(matches!(
        load_from(&file.0),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn settings_round_trip_through_json() {
    let mut settings = Settings::default();
    settings.motion.style = MotionStyle::Linear;
    settings.log_level = Some("keepalive=trace".into());

    let json = serde_json::to_string_pretty(&settings).unwrap();
    let file = TempConfig::with_contents("round-trip", &json);

    assert_eq!(load_from(&file.0).unwrap(), settings);
}
