use crate::errors::GestureError;

use super::{Intent, IntentTarget};

impl Intent {
    /// Human-readable label for logs and overlays.
    pub fn label(&self) -> &'static str {
        match self {
            Intent::NavigatePrev => "Previous Item",
            Intent::NavigateNext => "Next Item",
            Intent::Select => "Select",
            Intent::Delete => "Delete",
            Intent::Clear => "Clear Sentence",
            Intent::InsertSpace => "Insert Space",
            Intent::Speak => "Speak",
            Intent::StopSpeak => "Stop Speaking",
        }
    }

    /// Config name of the intent, as written in `[bindings]`.
    pub fn name(&self) -> &'static str {
        match self {
            Intent::NavigatePrev => "navigate_prev",
            Intent::NavigateNext => "navigate_next",
            Intent::Select => "select",
            Intent::Delete => "delete",
            Intent::Clear => "clear",
            Intent::InsertSpace => "insert_space",
            Intent::Speak => "speak",
            Intent::StopSpeak => "stop_speak",
        }
    }

    /// The one collaborator that consumes this intent.
    pub fn target(&self) -> IntentTarget {
        match self {
            Intent::NavigatePrev | Intent::NavigateNext | Intent::Select => {
                IntentTarget::Selection
            }
            Intent::Delete | Intent::Clear | Intent::InsertSpace => IntentTarget::Sentence,
            Intent::Speak | Intent::StopSpeak => IntentTarget::Speech,
        }
    }

    /// All intents, in declaration order.
    pub fn all() -> [Intent; 8] {
        [
            Intent::NavigatePrev,
            Intent::NavigateNext,
            Intent::Select,
            Intent::Delete,
            Intent::Clear,
            Intent::InsertSpace,
            Intent::Speak,
            Intent::StopSpeak,
        ]
    }
}

/// Parse a binding value from config.
///
/// `"none"` and the empty string mean "unbound" and yield `Ok(None)`.
/// Matching is case-insensitive and accepts `-` in place of `_`.
pub fn parse_binding(s: &str) -> Result<Option<Intent>, GestureError> {
    let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
    if normalized.is_empty() || normalized == "none" {
        return Ok(None);
    }

    Intent::all()
        .into_iter()
        .find(|intent| intent.name() == normalized)
        .map(Some)
        .ok_or_else(|| GestureError::UnknownIntent(s.to_string()))
}
