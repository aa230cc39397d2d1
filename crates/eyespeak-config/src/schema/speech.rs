//! Speech output configuration types.

use serde::{Deserialize, Serialize};

/// Where spoken sentences go.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum SpeechBackend {
    /// Log the sentence instead of speaking it.
    #[default]
    Log,
    /// Spawn an external TTS program with the sentence as last argument.
    Command,
}

/// Speech output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SpeechConfig {
    pub backend: SpeechBackend,
    pub command: String,
    pub args: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            backend: SpeechBackend::Log,
            command: "espeak-ng".into(),
            args: vec!["-s".into(), "120".into()],
        }
    }
}
