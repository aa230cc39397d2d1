//! Gesture channels. Each one turns a per-frame boolean or ratio into
//! discrete [`Intent`](eyespeak_common::Intent)s using elapsed time only.

mod both_eyes;
mod cooldown;
mod gaze;
mod hold;

pub use both_eyes::BothEyesChannel;
pub use cooldown::Cooldown;
pub use gaze::{navigation_intent, GazeChannel, GazeRules, GazeZone};
pub use hold::{HoldChannel, HoldRules, HoldState};
