/// Global spacing between blink/hold-family intents.
///
/// Gaze navigation keeps its own spacing and never touches this.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cooldown {
    last_action_at: Option<f64>,
}

impl Cooldown {
    /// Whether an intent may fire at `now_ms`.
    pub fn ready(&self, now_ms: f64, cooldown_ms: f64) -> bool {
        self.last_action_at
            .map_or(true, |last| now_ms - last >= cooldown_ms)
    }

    /// Record that an intent fired at `now_ms`.
    pub fn mark(&mut self, now_ms: f64) {
        self.last_action_at = Some(now_ms);
    }

    pub fn last_action_at(&self) -> Option<f64> {
        self.last_action_at
    }
}
