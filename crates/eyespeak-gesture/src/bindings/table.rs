use std::collections::HashMap;

use eyespeak_common::intents::parse_binding;
use eyespeak_common::{Eye, Intent};
use eyespeak_config::schema::BindingConfig;

use super::gesture::HoldGesture;

/// Maps [`HoldGesture`]s to [`Intent`]s.
///
/// Built from [`BindingConfig`] when a session starts. Gestures missing
/// from the table are unbound: the channel still tracks them but fires
/// nothing.
#[derive(Debug, Clone)]
pub struct BindingTable {
    bindings: HashMap<HoldGesture, Intent>,
}

impl BindingTable {
    /// Build the table from the config bindings section.
    ///
    /// Unknown intent names are logged as warnings and left unbound.
    pub fn from_config(config: &BindingConfig) -> Self {
        let mut bindings = HashMap::new();

        let mappings: [(HoldGesture, &str); 5] = [
            (HoldGesture::Blink(Eye::Right), &config.right_blink),
            (HoldGesture::Hold(Eye::Right), &config.right_hold),
            (HoldGesture::Blink(Eye::Left), &config.left_blink),
            (HoldGesture::Hold(Eye::Left), &config.left_hold),
            (HoldGesture::BothEyesHold, &config.both_hold),
        ];

        for (gesture, name) in mappings {
            match parse_binding(name) {
                Ok(Some(intent)) => {
                    bindings.insert(gesture, intent);
                }
                Ok(None) => {
                    tracing::debug!("{gesture} left unbound");
                }
                Err(e) => {
                    tracing::warn!("invalid binding {} = '{name}': {e}", gesture.config_key());
                }
            }
        }

        Self { bindings }
    }

    /// Look up the intent for a gesture.
    pub fn lookup(&self, gesture: HoldGesture) -> Option<Intent> {
        self.bindings.get(&gesture).copied()
    }

    /// Rebind (or with `None`, unbind) a single gesture.
    pub fn set(&mut self, gesture: HoldGesture, intent: Option<Intent>) {
        match intent {
            Some(intent) => {
                self.bindings.insert(gesture, intent);
            }
            None => {
                self.bindings.remove(&gesture);
            }
        }
    }

    /// Number of bound gestures.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether no gesture is bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl Default for BindingTable {
    fn default() -> Self {
        Self::from_config(&BindingConfig::default())
    }
}
