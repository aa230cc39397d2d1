use eyespeak_common::Eye;
use eyespeak_config::EyespeakConfig;

use crate::channels::{BothEyesChannel, Cooldown, GazeChannel, GazeRules, HoldChannel};

/// Every piece of mutable gesture state for one session.
///
/// Created fresh on session start and mutated once per processed frame.
#[derive(Debug, Clone)]
pub struct GestureTimers {
    pub right: HoldChannel,
    pub left: HoldChannel,
    pub both: BothEyesChannel,
    pub gaze: GazeChannel,
    /// Shared by every blink/hold-family channel.
    pub cooldown: Cooldown,
}

impl GestureTimers {
    pub fn new() -> Self {
        Self {
            right: HoldChannel::new(Eye::Right),
            left: HoldChannel::new(Eye::Left),
            both: BothEyesChannel::default(),
            gaze: GazeChannel::default(),
            cooldown: Cooldown::default(),
        }
    }

    pub fn hold(&self, eye: Eye) -> &HoldChannel {
        match eye {
            Eye::Left => &self.left,
            Eye::Right => &self.right,
        }
    }

    /// Drop every in-progress hold and dwell. The cooldown anchor is kept.
    pub fn reset_holds(&mut self) {
        self.right.reset();
        self.left.reset();
        self.both.reset();
        self.gaze.reset();
    }
}

impl Default for GestureTimers {
    fn default() -> Self {
        Self::new()
    }
}

/// Config values the session reads every frame, in milliseconds as `f64`.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    pub closed_threshold: f64,
    pub mirrored: bool,
    pub short_blink_min_ms: f64,
    pub right_hold_ms: f64,
    pub left_hold_ms: f64,
    pub both_eyes_hold_ms: f64,
    pub cooldown_ms: f64,
    pub stale_gap_ms: f64,
    pub gaze: GazeRules,
}

impl Tuning {
    pub fn from_config(config: &EyespeakConfig) -> Self {
        Self {
            closed_threshold: config.eyes.closed_threshold,
            mirrored: config.eyes.mirrored,
            short_blink_min_ms: f64::from(config.blink.short_blink_min_ms),
            right_hold_ms: f64::from(config.blink.right_hold_ms),
            left_hold_ms: f64::from(config.blink.left_hold_ms),
            both_eyes_hold_ms: f64::from(config.blink.both_eyes_hold_ms),
            cooldown_ms: f64::from(config.blink.cooldown_ms),
            stale_gap_ms: f64::from(config.session.stale_gap_ms),
            gaze: GazeRules {
                strategy: config.gaze.strategy,
                left_threshold: config.gaze.left_threshold,
                right_threshold: config.gaze.right_threshold,
                neutral_hold_ms: f64::from(config.gaze.neutral_hold_ms),
                side_hold_ms: f64::from(config.gaze.side_hold_ms),
                fixed_interval_ms: f64::from(config.gaze.fixed_interval_ms),
            },
        }
    }

    pub fn hold_ms(&self, eye: Eye) -> f64 {
        match eye {
            Eye::Left => self.left_hold_ms,
            Eye::Right => self.right_hold_ms,
        }
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::from_config(&EyespeakConfig::default())
    }
}
