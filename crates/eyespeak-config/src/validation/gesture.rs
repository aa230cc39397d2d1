//! Validation for the gesture sections: eyes, blink, and gaze.

use crate::schema::EyespeakConfig;

use super::helpers::{validate_range, validate_range_f64};

/// Validate eye-openness threshold.
pub(crate) fn validate_eyes(errors: &mut Vec<String>, config: &EyespeakConfig) {
    validate_range_f64(
        errors,
        "eyes.closed_threshold",
        config.eyes.closed_threshold,
        0.01,
        1.0,
    );
}

/// Validate blink/hold durations and their ordering.
pub(crate) fn validate_blink(errors: &mut Vec<String>, config: &EyespeakConfig) {
    let blink = &config.blink;
    validate_range(errors, "blink.short_blink_min_ms", blink.short_blink_min_ms, 30, 2000);
    validate_range(errors, "blink.right_hold_ms", blink.right_hold_ms, 100, 10000);
    validate_range(errors, "blink.left_hold_ms", blink.left_hold_ms, 100, 10000);
    validate_range(errors, "blink.both_eyes_hold_ms", blink.both_eyes_hold_ms, 100, 10000);
    validate_range(errors, "blink.cooldown_ms", blink.cooldown_ms, 0, 5000);

    for (name, hold) in [
        ("blink.right_hold_ms", blink.right_hold_ms),
        ("blink.left_hold_ms", blink.left_hold_ms),
    ] {
        if blink.short_blink_min_ms >= hold {
            errors.push(format!(
                "blink.short_blink_min_ms = {} must be shorter than {name} = {hold}",
                blink.short_blink_min_ms
            ));
        }
    }
}

/// Validate gaze zone thresholds and dwell timing.
pub(crate) fn validate_gaze(errors: &mut Vec<String>, config: &EyespeakConfig) {
    let gaze = &config.gaze;
    validate_range_f64(errors, "gaze.left_threshold", gaze.left_threshold, 0.0, 1.0);
    validate_range_f64(errors, "gaze.right_threshold", gaze.right_threshold, 0.0, 1.0);
    if gaze.left_threshold >= gaze.right_threshold {
        errors.push(format!(
            "gaze.left_threshold = {} must be below gaze.right_threshold = {}",
            gaze.left_threshold, gaze.right_threshold
        ));
    }
    validate_range(errors, "gaze.neutral_hold_ms", gaze.neutral_hold_ms, 0, 5000);
    validate_range(errors, "gaze.side_hold_ms", gaze.side_hold_ms, 0, 5000);
    validate_range(errors, "gaze.fixed_interval_ms", gaze.fixed_interval_ms, 50, 5000);
}
