use serde::{Deserialize, Serialize};
use std::fmt;

/// The user's anatomical eye, independent of camera mirroring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Eye {
    Left,
    Right,
}

impl fmt::Display for Eye {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Eye::Left => write!(f, "left"),
            Eye::Right => write!(f, "right"),
        }
    }
}

/// Horizontal side the gaze can dwell on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GazeDirection {
    Left,
    Right,
}

impl fmt::Display for GazeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GazeDirection::Left => write!(f, "left"),
            GazeDirection::Right => write!(f, "right"),
        }
    }
}
