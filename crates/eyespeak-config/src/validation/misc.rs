//! Validation for smaller config sections: session, composer, and speech.

use crate::schema::{EyespeakConfig, SpeechBackend};

use super::helpers::validate_range;

/// Validate session constraints.
pub(crate) fn validate_session(errors: &mut Vec<String>, config: &EyespeakConfig) {
    validate_range(
        errors,
        "session.stale_gap_ms",
        config.session.stale_gap_ms,
        100,
        60000,
    );
}

/// Validate composer constraints.
pub(crate) fn validate_composer(errors: &mut Vec<String>, config: &EyespeakConfig) {
    validate_range(
        errors,
        "composer.highlight_revert_ms",
        config.composer.highlight_revert_ms,
        50,
        5000,
    );
    if config.composer.words.is_empty() {
        errors.push("composer.words must not be empty".into());
    }
    if config.composer.words.iter().any(|w| w.trim().is_empty()) {
        errors.push("composer.words must not contain blank entries".into());
    }
}

/// Validate speech constraints.
pub(crate) fn validate_speech(errors: &mut Vec<String>, config: &EyespeakConfig) {
    if config.speech.backend == SpeechBackend::Command && config.speech.command.trim().is_empty() {
        errors.push("speech.command must be set when speech.backend = \"command\"".into());
    }
}
