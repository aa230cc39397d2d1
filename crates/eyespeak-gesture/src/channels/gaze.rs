//! Horizontal gaze navigation channel.

use eyespeak_common::{GazeDirection, Intent};
use eyespeak_config::schema::GazeStrategy;
use tracing::debug;

/// Horizontal band the gaze ratio falls in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GazeZone {
    Left,
    Center,
    Right,
}

impl GazeZone {
    /// Partition a gaze ratio. Values exactly on a threshold are center.
    pub fn classify(ratio: f64, left_threshold: f64, right_threshold: f64) -> GazeZone {
        if ratio < left_threshold {
            GazeZone::Left
        } else if ratio > right_threshold {
            GazeZone::Right
        } else {
            GazeZone::Center
        }
    }

    pub fn direction(self) -> Option<GazeDirection> {
        match self {
            GazeZone::Left => Some(GazeDirection::Left),
            GazeZone::Center => None,
            GazeZone::Right => Some(GazeDirection::Right),
        }
    }
}

/// Navigation intent for a gaze direction.
pub fn navigation_intent(direction: GazeDirection) -> Intent {
    match direction {
        GazeDirection::Left => Intent::NavigatePrev,
        GazeDirection::Right => Intent::NavigateNext,
    }
}

/// Zone thresholds and dwell timing, in milliseconds.
#[derive(Debug, Clone, Copy)]
pub struct GazeRules {
    pub strategy: GazeStrategy,
    pub left_threshold: f64,
    pub right_threshold: f64,
    pub neutral_hold_ms: f64,
    pub side_hold_ms: f64,
    pub fixed_interval_ms: f64,
}

/// Debounces the analog gaze ratio into discrete navigation intents.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GazeChannel {
    neutral_since: Option<f64>,
    side_since: Option<(GazeDirection, f64)>,
    armed: bool,
    last_direction_fired: Option<GazeDirection>,
    last_nav_at: Option<f64>,
}

impl GazeChannel {
    /// Whether a center dwell has armed the next move.
    pub fn armed(&self) -> bool {
        self.armed
    }

    pub fn last_direction_fired(&self) -> Option<GazeDirection> {
        self.last_direction_fired
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn update(&mut self, ratio: f64, now_ms: f64, rules: &GazeRules) -> Option<Intent> {
        let zone = GazeZone::classify(ratio, rules.left_threshold, rules.right_threshold);
        let direction = match rules.strategy {
            GazeStrategy::CenterHold => self.center_hold(zone, now_ms, rules),
            GazeStrategy::FixedInterval => self.fixed_interval(zone, now_ms, rules),
        }?;

        debug!("gaze navigation {direction} (ratio {ratio:.2})");
        self.last_direction_fired = Some(direction);
        self.last_nav_at = Some(now_ms);
        Some(navigation_intent(direction))
    }

    fn center_hold(
        &mut self,
        zone: GazeZone,
        now_ms: f64,
        rules: &GazeRules,
    ) -> Option<GazeDirection> {
        let Some(direction) = zone.direction() else {
            self.side_since = None;
            let since = *self.neutral_since.get_or_insert(now_ms);
            if !self.armed && now_ms - since >= rules.neutral_hold_ms {
                debug!("gaze re-armed after {:.0}ms in center", now_ms - since);
                self.armed = true;
                self.last_direction_fired = None;
            }
            return None;
        };

        self.neutral_since = None;
        let since = match self.side_since {
            Some((side, since)) if side == direction => since,
            _ => {
                self.side_since = Some((direction, now_ms));
                now_ms
            }
        };

        if !self.armed
            || self.last_direction_fired == Some(direction)
            || now_ms - since < rules.side_hold_ms
        {
            return None;
        }
        self.armed = false;
        Some(direction)
    }

    fn fixed_interval(
        &mut self,
        zone: GazeZone,
        now_ms: f64,
        rules: &GazeRules,
    ) -> Option<GazeDirection> {
        let direction = zone.direction()?;
        let due = self
            .last_nav_at
            .map_or(true, |last| now_ms - last >= rules.fixed_interval_ms);
        due.then_some(direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(strategy: GazeStrategy) -> GazeRules {
        GazeRules {
            strategy,
            left_threshold: 0.45,
            right_threshold: 0.60,
            neutral_hold_ms: 250.0,
            side_hold_ms: 550.0,
            fixed_interval_ms: 500.0,
        }
    }

    fn run(ch: &mut GazeChannel, rules: &GazeRules, frames: &[(f64, f64)]) -> Vec<(f64, Intent)> {
        frames
            .iter()
            .filter_map(|&(ratio, t)| ch.update(ratio, t, rules).map(|i| (t, i)))
            .collect()
    }

    #[test]
    fn classify_zones() {
        assert_eq!(GazeZone::classify(0.2, 0.45, 0.6), GazeZone::Left);
        assert_eq!(GazeZone::classify(0.45, 0.45, 0.6), GazeZone::Center);
        assert_eq!(GazeZone::classify(0.6, 0.45, 0.6), GazeZone::Center);
        assert_eq!(GazeZone::classify(0.61, 0.45, 0.6), GazeZone::Right);
        assert_eq!(GazeZone::classify(-3.0, 0.45, 0.6), GazeZone::Left);
    }

    #[test]
    fn center_then_side_fires_once() {
        let mut ch = GazeChannel::default();
        let rules = rules(GazeStrategy::CenterHold);
        let fired = run(
            &mut ch,
            &rules,
            &[
                (0.5, 0.0),
                (0.5, 150.0),
                (0.5, 300.0),
                (0.8, 400.0),
                (0.8, 700.0),
                (0.8, 1000.0),
                (0.8, 1300.0),
                (0.8, 2000.0),
            ],
        );
        assert_eq!(fired, vec![(1000.0, Intent::NavigateNext)]);
        assert!(!ch.armed());
    }

    #[test]
    fn side_without_center_dwell_never_fires() {
        let mut ch = GazeChannel::default();
        let rules = rules(GazeStrategy::CenterHold);
        let frames: Vec<(f64, f64)> = (0..20).map(|i| (0.2, i as f64 * 100.0)).collect();
        assert!(run(&mut ch, &rules, &frames).is_empty());
    }

    #[test]
    fn brief_center_does_not_arm() {
        let mut ch = GazeChannel::default();
        let rules = rules(GazeStrategy::CenterHold);
        let fired = run(
            &mut ch,
            &rules,
            &[(0.5, 0.0), (0.5, 200.0), (0.2, 250.0), (0.2, 900.0)],
        );
        assert!(fired.is_empty());
    }

    #[test]
    fn return_to_center_rearms_same_direction() {
        let mut ch = GazeChannel::default();
        let rules = rules(GazeStrategy::CenterHold);
        let fired = run(
            &mut ch,
            &rules,
            &[
                (0.5, 0.0),
                (0.5, 300.0),
                (0.2, 400.0),
                (0.2, 1000.0),
                (0.5, 1100.0),
                (0.5, 1400.0),
                (0.2, 1500.0),
                (0.2, 2100.0),
                (0.2, 2800.0),
            ],
        );
        assert_eq!(
            fired,
            vec![(1000.0, Intent::NavigatePrev), (2100.0, Intent::NavigatePrev)]
        );
    }

    #[test]
    fn switching_sides_restarts_side_timer() {
        let mut ch = GazeChannel::default();
        let rules = rules(GazeStrategy::CenterHold);
        let fired = run(
            &mut ch,
            &rules,
            &[
                (0.5, 0.0),
                (0.5, 300.0),
                (0.2, 400.0),
                (0.8, 700.0),
                (0.8, 1200.0),
                (0.8, 1250.0),
            ],
        );
        assert_eq!(fired, vec![(1250.0, Intent::NavigateNext)]);
    }

    #[test]
    fn center_never_fires_under_either_strategy() {
        for strategy in [GazeStrategy::CenterHold, GazeStrategy::FixedInterval] {
            let mut ch = GazeChannel::default();
            let rules = rules(strategy);
            let frames: Vec<(f64, f64)> = (0..50).map(|i| (0.52, i as f64 * 100.0)).collect();
            assert!(run(&mut ch, &rules, &frames).is_empty());
        }
    }

    #[test]
    fn fixed_interval_spaces_moves() {
        let mut ch = GazeChannel::default();
        let rules = rules(GazeStrategy::FixedInterval);
        let frames: Vec<(f64, f64)> = (0..=12).map(|i| (0.8, i as f64 * 100.0)).collect();
        let fired = run(&mut ch, &rules, &frames);
        assert_eq!(
            fired,
            vec![
                (0.0, Intent::NavigateNext),
                (500.0, Intent::NavigateNext),
                (1000.0, Intent::NavigateNext)
            ]
        );
    }

    #[test]
    fn fixed_interval_ignores_dwell() {
        let mut ch = GazeChannel::default();
        let rules = rules(GazeStrategy::FixedInterval);
        let fired = run(&mut ch, &rules, &[(0.2, 0.0), (0.5, 100.0), (0.8, 600.0)]);
        assert_eq!(
            fired,
            vec![(0.0, Intent::NavigatePrev), (600.0, Intent::NavigateNext)]
        );
    }
}
