//! Both-eyes-closed hold channel.

use eyespeak_common::Intent;
use tracing::debug;

use super::cooldown::Cooldown;

/// Counts consecutive frames with both eyes closed and fires once per
/// closure when the closure outlasts the hold duration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BothEyesChannel {
    frames_closed: u32,
    first_closed_at: Option<f64>,
    fired: bool,
}

impl BothEyesChannel {
    pub fn frames_closed(&self) -> u32 {
        self.frames_closed
    }

    pub fn first_closed_at(&self) -> Option<f64> {
        self.first_closed_at
    }

    pub fn fired(&self) -> bool {
        self.fired
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn update(
        &mut self,
        both_closed: bool,
        now_ms: f64,
        hold_ms: f64,
        cooldown_ms: f64,
        intent: Option<Intent>,
        cooldown: &mut Cooldown,
    ) -> Option<Intent> {
        if !both_closed {
            if self.frames_closed > 0 {
                debug!("both eyes reopened after {} frames", self.frames_closed);
            }
            self.reset();
            return None;
        }

        self.frames_closed = self.frames_closed.saturating_add(1);
        let since = *self.first_closed_at.get_or_insert(now_ms);
        if self.fired || now_ms - since < hold_ms {
            return None;
        }

        let Some(intent) = intent else {
            self.fired = true;
            return None;
        };
        if !cooldown.ready(now_ms, cooldown_ms) {
            return None;
        }

        debug!(
            "both-eyes hold fired {:?} after {:.0}ms ({} frames)",
            intent,
            now_ms - since,
            self.frames_closed
        );
        self.fired = true;
        cooldown.mark(now_ms);
        Some(intent)
    }
}
