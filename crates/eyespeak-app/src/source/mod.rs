//! Landmark frame sources: recorded JSON Lines files, replayed either
//! instantly or paced by their timestamps.

mod realtime;
mod replay;

pub use realtime::spawn_realtime;
pub use replay::{parse_frames, read_frames};

use eyespeak_common::LandmarkFrame;
use serde::{Deserialize, Serialize};

/// One recorded frame. `landmarks` is `null` when no face was detected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    /// Capture time in milliseconds.
    pub t: f64,
    #[serde(default)]
    pub landmarks: Option<LandmarkFrame>,
}
