//! Configuration schema types for EyeSpeak.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the gesture core was tuned with.

mod binding_config;
mod blink;
mod composer;
mod eyes;
mod gaze;
mod session;
mod speech;
mod system;

pub use binding_config::*;
pub use blink::*;
pub use composer::*;
pub use eyes::*;
pub use gaze::*;
pub use session::*;
pub use speech::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for EyeSpeak.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct EyespeakConfig {
    pub eyes: EyesConfig,
    pub blink: BlinkConfig,
    pub gaze: GazeConfig,
    pub bindings: BindingConfig,
    pub session: SessionConfig,
    pub composer: ComposerConfig,
    pub speech: SpeechConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
