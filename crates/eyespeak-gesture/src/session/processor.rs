use eyespeak_common::{Eye, Intent, LandmarkFrame};
use eyespeak_config::EyespeakConfig;
use tracing::{debug, info, trace};

use crate::bindings::{BindingTable, HoldGesture};
use crate::channels::HoldRules;
use crate::estimator::{estimate, EyeState};
use crate::landmarks::LandmarkSchema;

use super::types::{GestureTimers, Tuning};

/// Turns a stream of landmark frames into intents.
///
/// Owns all timer state; the caller only supplies frames and their
/// timestamps. Intents fired in the same frame come back in a fixed
/// order: both-eyes, right eye, left eye, gaze.
pub struct GestureSession {
    tuning: Tuning,
    bindings: BindingTable,
    schema: LandmarkSchema,
    timers: GestureTimers,
    last_frame_at: Option<f64>,
}

impl GestureSession {
    pub fn new(config: &EyespeakConfig) -> Self {
        Self::with_schema(config, LandmarkSchema::mediapipe())
    }

    pub fn with_schema(config: &EyespeakConfig, schema: LandmarkSchema) -> Self {
        let bindings = BindingTable::from_config(&config.bindings);
        info!(
            "gesture session started: {} gestures bound, gaze strategy {:?}",
            bindings.len(),
            config.gaze.strategy
        );
        Self {
            tuning: Tuning::from_config(config),
            bindings,
            schema,
            timers: GestureTimers::new(),
            last_frame_at: None,
        }
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn timers(&self) -> &GestureTimers {
        &self.timers
    }

    pub fn bindings(&self) -> &BindingTable {
        &self.bindings
    }

    pub fn bindings_mut(&mut self) -> &mut BindingTable {
        &mut self.bindings
    }

    /// Forget all holds, dwells and the cooldown anchor.
    pub fn reset(&mut self) {
        self.timers = GestureTimers::new();
        self.last_frame_at = None;
    }

    /// Process one frame. `None` means no face was detected.
    ///
    /// Frames without a usable face (missing landmarks, degenerate eye
    /// geometry) leave every timer untouched.
    pub fn process_frame(&mut self, frame: Option<&LandmarkFrame>, now_ms: f64) -> Vec<Intent> {
        let Some(frame) = frame else {
            trace!("no face at {now_ms:.0}ms");
            return Vec::new();
        };
        match estimate(frame, &self.schema, self.tuning.mirrored) {
            Ok(state) => self.process_sample(&state, now_ms),
            Err(e) => {
                trace!("skipping frame at {now_ms:.0}ms: {e}");
                Vec::new()
            }
        }
    }

    /// Process one already-estimated eye reading.
    pub fn process_sample(&mut self, state: &EyeState, now_ms: f64) -> Vec<Intent> {
        if !now_ms.is_finite() {
            trace!("skipping frame with non-finite timestamp");
            return Vec::new();
        }
        if let Some(last) = self.last_frame_at {
            if now_ms < last {
                debug!("skipping out-of-order frame ({now_ms:.0}ms after {last:.0}ms)");
                return Vec::new();
            }
            if now_ms - last > self.tuning.stale_gap_ms {
                debug!(
                    "face lost for {:.0}ms, resetting gesture timers",
                    now_ms - last
                );
                self.timers.reset_holds();
            }
        }
        self.last_frame_at = Some(now_ms);

        let right_closed = state.openness(Eye::Right) < self.tuning.closed_threshold;
        let left_closed = state.openness(Eye::Left) < self.tuning.closed_threshold;

        let right_rules = self.hold_rules(Eye::Right);
        let left_rules = self.hold_rules(Eye::Left);
        let both_intent = self.bindings.lookup(HoldGesture::BothEyesHold);

        let mut intents = Vec::new();
        let timers = &mut self.timers;
        if let Some(intent) = timers.both.update(
            right_closed && left_closed,
            now_ms,
            self.tuning.both_eyes_hold_ms,
            self.tuning.cooldown_ms,
            both_intent,
            &mut timers.cooldown,
        ) {
            intents.push(intent);
        }

        if let Some(intent) = timers.right.update(
            right_closed && !left_closed,
            now_ms,
            &right_rules,
            &mut timers.cooldown,
        ) {
            intents.push(intent);
        }

        if let Some(intent) = timers.left.update(
            left_closed && !right_closed,
            now_ms,
            &left_rules,
            &mut timers.cooldown,
        ) {
            intents.push(intent);
        }

        if let Some(intent) = timers.gaze.update(state.gaze_ratio, now_ms, &self.tuning.gaze) {
            intents.push(intent);
        }

        intents
    }

    fn hold_rules(&self, eye: Eye) -> HoldRules {
        HoldRules {
            short_blink_min_ms: self.tuning.short_blink_min_ms,
            hold_ms: self.tuning.hold_ms(eye),
            cooldown_ms: self.tuning.cooldown_ms,
            blink_intent: self.bindings.lookup(HoldGesture::Blink(eye)),
            hold_intent: self.bindings.lookup(HoldGesture::Hold(eye)),
        }
    }
}
