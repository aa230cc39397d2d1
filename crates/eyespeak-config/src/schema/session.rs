//! Session-level gesture settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// A face-tracking gap longer than this resets every gesture timer
    /// when the face is reacquired.
    pub stale_gap_ms: u32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self { stale_gap_ms: 1200 }
    }
}
