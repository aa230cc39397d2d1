use eyespeak_common::Eye;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A blink/hold gesture that can be bound to an intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HoldGesture {
    /// One eye closed and released before its hold threshold.
    Blink(Eye),
    /// One eye kept closed past its hold threshold.
    Hold(Eye),
    /// Both eyes kept closed past the both-eyes threshold.
    BothEyesHold,
}

impl HoldGesture {
    /// Config key of this gesture in `[bindings]`.
    pub fn config_key(&self) -> &'static str {
        match self {
            HoldGesture::Blink(Eye::Right) => "right_blink",
            HoldGesture::Hold(Eye::Right) => "right_hold",
            HoldGesture::Blink(Eye::Left) => "left_blink",
            HoldGesture::Hold(Eye::Left) => "left_hold",
            HoldGesture::BothEyesHold => "both_hold",
        }
    }
}

impl fmt::Display for HoldGesture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HoldGesture::Blink(eye) => write!(f, "{eye}-eye blink"),
            HoldGesture::Hold(eye) => write!(f, "{eye}-eye hold"),
            HoldGesture::BothEyesHold => write!(f, "both-eyes hold"),
        }
    }
}
