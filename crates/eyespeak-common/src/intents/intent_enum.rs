use serde::{Deserialize, Serialize};

/// Every discrete user intent the gesture core can emit.
///
/// Blink, hold, and gaze gestures all resolve to an `Intent`.
/// The composer matches on this enum to route to a collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    // -- Selection --
    NavigatePrev,
    NavigateNext,
    Select,

    // -- Sentence --
    Delete,
    Clear,
    InsertSpace,

    // -- Speech --
    Speak,
    StopSpeak,
}
