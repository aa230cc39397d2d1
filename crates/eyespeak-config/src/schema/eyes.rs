//! Eye-state estimation settings.

use serde::{Deserialize, Serialize};

/// Eye openness and landmark orientation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EyesConfig {
    /// An eye is closed when its openness ratio falls below this value.
    pub closed_threshold: f64,
    /// Camera image is mirrored (selfie view). Decides which landmark
    /// group is the user's anatomical right eye.
    pub mirrored: bool,
}

impl Default for EyesConfig {
    fn default() -> Self {
        Self {
            closed_threshold: 0.25,
            mirrored: true,
        }
    }
}
