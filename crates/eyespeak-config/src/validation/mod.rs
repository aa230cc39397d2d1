//! Full configuration validation.
//!
//! Validates numeric ranges, threshold ordering, and binding names.
//! Each domain has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod gesture;
mod helpers;
mod misc;

#[cfg(test)]
mod tests;

use crate::bindings;
use crate::schema::EyespeakConfig;
use eyespeak_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &EyespeakConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    if let Err(ConfigError::ValidationError(e)) = bindings::validate_intent_names(&config.bindings)
    {
        errors.push(e);
    }

    gesture::validate_eyes(&mut errors, config);
    gesture::validate_blink(&mut errors, config);
    gesture::validate_gaze(&mut errors, config);
    misc::validate_session(&mut errors, config);
    misc::validate_composer(&mut errors, config);
    misc::validate_speech(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
