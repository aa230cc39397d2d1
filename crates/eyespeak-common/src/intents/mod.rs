use serde::{Deserialize, Serialize};

mod dispatch;
mod intent_enum;

pub use dispatch::parse_binding;
pub use intent_enum::*;

/// External collaborator that consumes an [`Intent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntentTarget {
    /// Ordered item grid with one active index.
    Selection,
    /// Composed output text.
    Sentence,
    /// Text-to-speech output.
    Speech,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GestureError;

    #[test]
    fn all_intents_have_labels() {
        for intent in Intent::all() {
            assert!(!intent.label().is_empty(), "intent {:?} has empty label", intent);
        }
    }

    #[test]
    fn every_intent_has_exactly_one_target() {
        let selection: Vec<_> = Intent::all()
            .into_iter()
            .filter(|i| i.target() == IntentTarget::Selection)
            .collect();
        assert_eq!(
            selection,
            vec![Intent::NavigatePrev, Intent::NavigateNext, Intent::Select]
        );
        assert_eq!(Intent::Clear.target(), IntentTarget::Sentence);
        assert_eq!(Intent::InsertSpace.target(), IntentTarget::Sentence);
        assert_eq!(Intent::StopSpeak.target(), IntentTarget::Speech);
    }

    #[test]
    fn names_match_serde_representation() {
        for intent in Intent::all() {
            let json = serde_json::to_string(&intent).unwrap();
            assert_eq!(json, format!("\"{}\"", intent.name()));
        }
    }

    #[test]
    fn parse_binding_accepts_names() {
        assert_eq!(parse_binding("select").unwrap(), Some(Intent::Select));
        assert_eq!(parse_binding("Stop-Speak").unwrap(), Some(Intent::StopSpeak));
        assert_eq!(parse_binding("  delete ").unwrap(), Some(Intent::Delete));
    }

    #[test]
    fn parse_binding_none_is_unbound() {
        assert_eq!(parse_binding("none").unwrap(), None);
        assert_eq!(parse_binding("").unwrap(), None);
    }

    #[test]
    fn parse_binding_rejects_unknown() {
        let err = parse_binding("jump").unwrap_err();
        assert_eq!(err, GestureError::UnknownIntent("jump".into()));
    }

    #[test]
    fn intent_target_serde() {
        let json = serde_json::to_string(&IntentTarget::Speech).unwrap();
        assert_eq!(json, "\"speech\"");
        let back: IntentTarget = serde_json::from_str(&json).unwrap();
        assert_eq!(back, IntentTarget::Speech);
    }
}
