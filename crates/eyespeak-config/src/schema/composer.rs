//! Sentence composer settings: vocabulary and selection behavior.

use serde::{Deserialize, Serialize};

/// Which item grid is shown.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum Screen {
    #[default]
    Words,
    Letters,
}

/// Composer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComposerConfig {
    pub start_screen: Screen,
    /// How long the transient space highlight stays before the previous
    /// item is restored.
    pub highlight_revert_ms: u32,
    pub words: Vec<String>,
}

impl Default for ComposerConfig {
    fn default() -> Self {
        Self {
            start_screen: Screen::Words,
            highlight_revert_ms: 350,
            words: default_words(),
        }
    }
}

/// Built-in word vocabulary.
pub fn default_words() -> Vec<String> {
    [
        "yes", "no", "I", "You", "We", "They", "am", "able", "have", "He", "She", "want",
        "need", "like", "love", "hate", "see", "because", "this", "is", "go", "come", "stop",
        "mum", "eat", "drink", "trying", "tried", "what", "now", "later", "today", "tomorrow",
        "happy", "sad", "more", "angry", "tired", "good", "bad", "really", "very", "so", "too",
        "much", "a lot", "hello", "bye", "please", "thanks", "help", "sorry", "home", "to",
        "food", "water", "music", "still", "look", "wait", "okay", "great", "me",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}
