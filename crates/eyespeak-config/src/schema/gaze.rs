//! Horizontal gaze navigation settings.

use serde::{Deserialize, Serialize};

/// Debounce strategy for gaze navigation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum GazeStrategy {
    /// Dwell in center to arm, dwell on a side to fire once.
    #[default]
    CenterHold,
    /// Fire whenever off-center, at most once per interval.
    FixedInterval,
}

/// Gaze zone thresholds and dwell timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GazeConfig {
    pub strategy: GazeStrategy,
    /// Gaze ratio below this is the left zone.
    pub left_threshold: f64,
    /// Gaze ratio above this is the right zone.
    pub right_threshold: f64,
    /// Center dwell needed to arm a move (center_hold only).
    pub neutral_hold_ms: u32,
    /// Side dwell needed to fire a move (center_hold only).
    pub side_hold_ms: u32,
    /// Spacing between moves (fixed_interval only).
    pub fixed_interval_ms: u32,
}

impl Default for GazeConfig {
    fn default() -> Self {
        Self {
            strategy: GazeStrategy::CenterHold,
            left_threshold: 0.45,
            right_threshold: 0.60,
            neutral_hold_ms: 250,
            side_hold_ms: 550,
            fixed_interval_ms: 500,
        }
    }
}
