//! Tests for the full validation pipeline.

use super::*;
use crate::schema::*;

#[test]
fn default_config_validates() {
    let config = EyespeakConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_closed_threshold_out_of_range() {
    let mut config = EyespeakConfig::default();
    config.eyes.closed_threshold = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("eyes.closed_threshold"));
}

#[test]
fn catches_nan_threshold() {
    let mut config = EyespeakConfig::default();
    config.eyes.closed_threshold = f64::NAN;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("eyes.closed_threshold"));
}

#[test]
fn catches_short_blink_not_shorter_than_hold() {
    let mut config = EyespeakConfig::default();
    config.blink.short_blink_min_ms = 1300;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("must be shorter than blink.right_hold_ms"));
    assert!(err.contains("must be shorter than blink.left_hold_ms"));
}

#[test]
fn catches_hold_too_short() {
    let mut config = EyespeakConfig::default();
    config.blink.both_eyes_hold_ms = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("blink.both_eyes_hold_ms"));
}

#[test]
fn catches_inverted_gaze_thresholds() {
    let mut config = EyespeakConfig::default();
    config.gaze.left_threshold = 0.7;
    config.gaze.right_threshold = 0.6;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("must be below gaze.right_threshold"));
}

#[test]
fn catches_fixed_interval_too_small() {
    let mut config = EyespeakConfig::default();
    config.gaze.fixed_interval_ms = 10;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("gaze.fixed_interval_ms"));
}

#[test]
fn catches_unknown_binding() {
    let mut config = EyespeakConfig::default();
    config.bindings.both_hold = "wipe".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("bindings.both_hold"));
}

#[test]
fn catches_empty_vocabulary() {
    let mut config = EyespeakConfig::default();
    config.composer.words.clear();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("composer.words"));
}

#[test]
fn catches_command_backend_without_command() {
    let mut config = EyespeakConfig::default();
    config.speech.backend = SpeechBackend::Command;
    config.speech.command = " ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("speech.command"));
}

#[test]
fn collects_multiple_errors() {
    let mut config = EyespeakConfig::default();
    config.session.stale_gap_ms = 0;
    config.composer.highlight_revert_ms = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.stale_gap_ms"));
    assert!(err.contains("composer.highlight_revert_ms"));
    assert!(err.contains("; "));
}
