//! Gesture binding validation utilities.

use crate::schema::BindingConfig;
use eyespeak_common::intents::parse_binding;
use eyespeak_common::ConfigError;

/// Returns all bindings as `(name, intent_name)` pairs.
pub fn all_bindings(config: &BindingConfig) -> Vec<(&str, &str)> {
    vec![
        ("right_blink", &config.right_blink),
        ("right_hold", &config.right_hold),
        ("left_blink", &config.left_blink),
        ("left_hold", &config.left_hold),
        ("both_hold", &config.both_hold),
    ]
}

/// Validate that every binding names a known intent (or `"none"`).
pub fn validate_intent_names(config: &BindingConfig) -> Result<(), ConfigError> {
    let unknown: Vec<String> = all_bindings(config)
        .into_iter()
        .filter(|(_, value)| parse_binding(value).is_err())
        .map(|(name, value)| format!("bindings.{name} = '{value}' is not a known intent"))
        .collect();

    if unknown.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(unknown.join("; ")))
    }
}
