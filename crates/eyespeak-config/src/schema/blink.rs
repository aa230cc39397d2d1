//! Blink and hold timing.

use serde::{Deserialize, Serialize};

/// Durations for the blink/hold gesture family, in milliseconds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BlinkConfig {
    /// Shortest single-eye closure that counts as a deliberate blink.
    pub short_blink_min_ms: u32,
    /// Closure length at which the right-eye hold action fires.
    pub right_hold_ms: u32,
    /// Closure length at which the left-eye hold action fires.
    pub left_hold_ms: u32,
    /// Both-eyes closure length at which the both-eyes action fires.
    pub both_eyes_hold_ms: u32,
    /// Minimum spacing between any two blink/hold intents.
    pub cooldown_ms: u32,
}

impl Default for BlinkConfig {
    fn default() -> Self {
        Self {
            short_blink_min_ms: 250,
            right_hold_ms: 1200,
            left_hold_ms: 1200,
            both_eyes_hold_ms: 600,
            cooldown_ms: 400,
        }
    }
}
