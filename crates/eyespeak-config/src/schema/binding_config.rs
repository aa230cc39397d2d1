//! Gesture-to-intent bindings.
//!
//! Named `binding_config` to avoid clash with the crate-level `bindings` module.

use serde::{Deserialize, Serialize};

/// Which intent each blink/hold gesture fires.
///
/// Values are intent names: `select`, `delete`, `clear`, `insert_space`,
/// `speak`, `stop_speak`, `navigate_prev`, `navigate_next`.
/// `"none"` leaves a gesture unbound.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BindingConfig {
    pub right_blink: String,
    pub right_hold: String,
    pub left_blink: String,
    pub left_hold: String,
    pub both_hold: String,
}

impl Default for BindingConfig {
    fn default() -> Self {
        Self {
            right_blink: "select".into(),
            right_hold: "stop_speak".into(),
            left_blink: "speak".into(),
            left_hold: "delete".into(),
            both_hold: "clear".into(),
        }
    }
}
