//! Single-eye hold channel.

use eyespeak_common::{Eye, Intent};
use tracing::debug;

use super::cooldown::Cooldown;

/// Per-eye hold state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HoldState {
    /// Eye open (or both eyes closed).
    Idle,
    /// This eye closed while the other stays open.
    Holding { since_ms: f64 },
    /// Hold threshold crossed; nothing more fires until release.
    LongFired { since_ms: f64 },
}

/// Durations and bound intents for one eye's channel.
#[derive(Debug, Clone, Copy)]
pub struct HoldRules {
    pub short_blink_min_ms: f64,
    pub hold_ms: f64,
    pub cooldown_ms: f64,
    pub blink_intent: Option<Intent>,
    pub hold_intent: Option<Intent>,
}

/// Classifies one eye's continuous closure as a short blink (fired on
/// release) or a long hold (fired when the threshold is crossed).
#[derive(Debug, Clone)]
pub struct HoldChannel {
    eye: Eye,
    state: HoldState,
}

impl HoldChannel {
    pub fn new(eye: Eye) -> Self {
        Self {
            eye,
            state: HoldState::Idle,
        }
    }

    pub fn eye(&self) -> Eye {
        self.eye
    }

    pub fn state(&self) -> HoldState {
        self.state
    }

    pub fn reset(&mut self) {
        self.state = HoldState::Idle;
    }

    /// Advance one frame. `holding` is true when this eye is closed and
    /// the other eye is open.
    pub fn update(
        &mut self,
        holding: bool,
        now_ms: f64,
        rules: &HoldRules,
        cooldown: &mut Cooldown,
    ) -> Option<Intent> {
        match (self.state, holding) {
            (HoldState::Idle, true) => {
                debug!("{} eye hold started at {:.0}ms", self.eye, now_ms);
                self.state = HoldState::Holding { since_ms: now_ms };
                None
            }
            (HoldState::Idle, false) => None,
            (HoldState::Holding { since_ms }, true) => {
                if now_ms - since_ms < rules.hold_ms {
                    return None;
                }
                match rules.hold_intent {
                    Some(intent) if cooldown.ready(now_ms, rules.cooldown_ms) => {
                        debug!(
                            "{} eye hold fired {:?} after {:.0}ms",
                            self.eye,
                            intent,
                            now_ms - since_ms
                        );
                        cooldown.mark(now_ms);
                        self.state = HoldState::LongFired { since_ms };
                        Some(intent)
                    }
                    // Held past the threshold but still cooling down: retry next frame.
                    Some(_) => None,
                    None => {
                        self.state = HoldState::LongFired { since_ms };
                        None
                    }
                }
            }
            (HoldState::LongFired { .. }, true) => None,
            (HoldState::Holding { since_ms }, false) => {
                self.state = HoldState::Idle;
                let held_ms = now_ms - since_ms;
                if held_ms < rules.short_blink_min_ms || held_ms >= rules.hold_ms {
                    debug!("{} eye released after {:.0}ms, no action", self.eye, held_ms);
                    return None;
                }
                let intent = rules.blink_intent?;
                if !cooldown.ready(now_ms, rules.cooldown_ms) {
                    debug!("{} eye blink suppressed by cooldown", self.eye);
                    return None;
                }
                debug!("{} eye blink fired {:?} ({:.0}ms)", self.eye, intent, held_ms);
                cooldown.mark(now_ms);
                Some(intent)
            }
            (HoldState::LongFired { .. }, false) => {
                self.state = HoldState::Idle;
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> HoldRules {
        HoldRules {
            short_blink_min_ms: 250.0,
            hold_ms: 650.0,
            cooldown_ms: 400.0,
            blink_intent: Some(Intent::Select),
            hold_intent: Some(Intent::Delete),
        }
    }

    /// Feed `(holding, t)` pairs and collect every fired intent.
    fn run(channel: &mut HoldChannel, cooldown: &mut Cooldown, frames: &[(bool, f64)]) -> Vec<(f64, Intent)> {
        let rules = rules();
        frames
            .iter()
            .filter_map(|&(holding, t)| channel.update(holding, t, &rules, cooldown).map(|i| (t, i)))
            .collect()
    }

    #[test]
    fn blink_below_minimum_fires_nothing() {
        let mut ch = HoldChannel::new(Eye::Right);
        let mut cd = Cooldown::default();
        let fired = run(&mut ch, &mut cd, &[(true, 0.0), (true, 100.0), (false, 200.0)]);
        assert!(fired.is_empty());
        assert_eq!(ch.state(), HoldState::Idle);
    }

    #[test]
    fn short_blink_fires_once_on_release() {
        let mut ch = HoldChannel::new(Eye::Right);
        let mut cd = Cooldown::default();
        let fired = run(
            &mut ch,
            &mut cd,
            &[(true, 0.0), (true, 150.0), (true, 250.0), (false, 300.0), (false, 400.0)],
        );
        assert_eq!(fired, vec![(300.0, Intent::Select)]);
    }

    #[test]
    fn long_hold_fires_at_threshold_and_not_on_release() {
        let mut ch = HoldChannel::new(Eye::Left);
        let mut cd = Cooldown::default();
        let frames: Vec<(bool, f64)> = (0..=10)
            .map(|i| (true, i as f64 * 100.0))
            .chain([(false, 1100.0)])
            .collect();
        let fired = run(&mut ch, &mut cd, &frames);
        assert_eq!(fired, vec![(700.0, Intent::Delete)]);
    }

    #[test]
    fn long_hold_waits_for_cooldown() {
        let mut ch = HoldChannel::new(Eye::Left);
        let mut cd = Cooldown::default();
        cd.mark(400.0);
        let frames: Vec<(bool, f64)> = (0..=10).map(|i| (true, i as f64 * 100.0)).collect();
        let fired = run(&mut ch, &mut cd, &frames);
        assert_eq!(fired, vec![(800.0, Intent::Delete)]);
    }

    #[test]
    fn release_past_threshold_never_fires_blink() {
        let mut ch = HoldChannel::new(Eye::Right);
        let mut cd = Cooldown::default();
        cd.mark(0.0);
        let mut rules = rules();
        rules.cooldown_ms = 2000.0;
        let mut fired = Vec::new();
        for &(holding, t) in &[(true, 0.0), (true, 660.0), (false, 700.0)] {
            fired.extend(ch.update(holding, t, &rules, &mut cd));
        }
        assert!(fired.is_empty());
        assert_eq!(ch.state(), HoldState::Idle);
    }

    #[test]
    fn unbound_hold_still_swallows_release() {
        let mut ch = HoldChannel::new(Eye::Right);
        let mut cd = Cooldown::default();
        let mut rules = rules();
        rules.hold_intent = None;
        assert_eq!(ch.update(true, 0.0, &rules, &mut cd), None);
        assert_eq!(ch.update(true, 660.0, &rules, &mut cd), None);
        assert_eq!(ch.state(), HoldState::LongFired { since_ms: 0.0 });
        assert_eq!(ch.update(false, 700.0, &rules, &mut cd), None);
        assert_eq!(cd.last_action_at(), None);
    }

    #[test]
    fn blink_suppressed_during_cooldown_still_resets() {
        let mut ch = HoldChannel::new(Eye::Right);
        let mut cd = Cooldown::default();
        cd.mark(100.0);
        let fired = run(&mut ch, &mut cd, &[(true, 0.0), (false, 300.0)]);
        assert!(fired.is_empty());
        assert_eq!(ch.state(), HoldState::Idle);
    }

    #[test]
    fn unbound_blink_does_not_consume_cooldown() {
        let mut ch = HoldChannel::new(Eye::Right);
        let mut cd = Cooldown::default();
        let mut rules = rules();
        rules.blink_intent = None;
        ch.update(true, 0.0, &rules, &mut cd);
        assert_eq!(ch.update(false, 300.0, &rules, &mut cd), None);
        assert_eq!(cd.last_action_at(), None);
    }

    #[test]
    fn hold_timer_restarts_after_release() {
        let mut ch = HoldChannel::new(Eye::Right);
        let mut cd = Cooldown::default();
        let rules = rules();
        ch.update(true, 0.0, &rules, &mut cd);
        ch.update(false, 100.0, &rules, &mut cd);
        ch.update(true, 2000.0, &rules, &mut cd);
        assert_eq!(ch.state(), HoldState::Holding { since_ms: 2000.0 });
    }
}
