//! EyeSpeak configuration system.
//!
//! Provides TOML-based configuration for the gesture core and the
//! composer, with full validation. All config sections use defaults so
//! partial configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use eyespeak_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod bindings;
pub mod schema;
pub mod toml_loader;
pub mod validation;

// Re-export core types for convenience
pub use schema::{EyespeakConfig, CONFIG_SCHEMA_VERSION};

use eyespeak_common::ConfigError;
use std::path::Path;

/// Load and validate config.
///
/// With `path`, reads that file (it must exist). Without, loads
/// `config.toml` from the OS config directory, creating a default if
/// none exists.
pub fn load_config(path: Option<&Path>) -> Result<EyespeakConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &EyespeakConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
