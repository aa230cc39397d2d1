//! Sentence composer: applies intents to the item grids, the sentence
//! buffer and speech output.

mod selection;
mod sentence;
mod speech;

pub use selection::Selection;
pub use sentence::Sentence;
pub use speech::{sink_from_config, SpeechSink};

use eyespeak_common::{Intent, IntentTarget};
use eyespeak_config::schema::{ComposerConfig, Screen};

/// A highlight that must be put back once `due_at_ms` passes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingRevert {
    restore_index: usize,
    due_at_ms: f64,
}

pub struct Composer {
    selection: Selection,
    sentence: Sentence,
    speech: Box<dyn SpeechSink>,
    highlight_revert_ms: f64,
    pending_revert: Option<PendingRevert>,
}

impl Composer {
    pub fn new(config: &ComposerConfig, speech: Box<dyn SpeechSink>) -> Self {
        Self {
            selection: Selection::new(config.words.clone(), config.start_screen),
            sentence: Sentence::new(),
            speech,
            highlight_revert_ms: f64::from(config.highlight_revert_ms),
            pending_revert: None,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn sentence(&self) -> &Sentence {
        &self.sentence
    }

    pub fn set_screen(&mut self, screen: Screen) {
        self.pending_revert = None;
        self.selection.set_screen(screen);
    }

    /// Restore a transient highlight whose time is up.
    pub fn tick(&mut self, now_ms: f64) {
        if let Some(revert) = self.pending_revert {
            if now_ms >= revert.due_at_ms {
                self.selection.set_active(revert.restore_index);
                self.pending_revert = None;
            }
        }
    }

    /// Apply one intent at `now_ms`.
    pub fn apply(&mut self, intent: Intent, now_ms: f64) {
        tracing::info!("{}", intent.label());
        match intent.target() {
            IntentTarget::Selection => self.apply_selection(intent),
            IntentTarget::Sentence => self.apply_sentence(intent, now_ms),
            IntentTarget::Speech => self.apply_speech(intent),
        }
    }

    fn apply_selection(&mut self, intent: Intent) {
        match intent {
            Intent::NavigatePrev => {
                self.pending_revert = None;
                self.selection.prev();
            }
            Intent::NavigateNext => {
                self.pending_revert = None;
                self.selection.next();
            }
            Intent::Select => {
                let Some(item) = self.selection.active_item() else {
                    return;
                };
                match self.selection.screen() {
                    Screen::Words => self.sentence.push_word(item),
                    Screen::Letters => self.sentence.push_item(item),
                }
                tracing::debug!("sentence: {:?}", self.sentence.as_str());
            }
            _ => {}
        }
    }

    fn apply_sentence(&mut self, intent: Intent, now_ms: f64) {
        match intent {
            Intent::Delete => match self.selection.screen() {
                Screen::Words => self.sentence.delete_last_word(),
                Screen::Letters => self.sentence.delete_last_char(),
            },
            Intent::Clear => self.sentence.clear(),
            Intent::InsertSpace => {
                self.sentence.push_space();
                if let Some(space) = self.selection.space_index() {
                    let restore_index = self
                        .pending_revert
                        .map_or(self.selection.active_index(), |r| r.restore_index);
                    self.selection.set_active(space);
                    self.pending_revert = Some(PendingRevert {
                        restore_index,
                        due_at_ms: now_ms + self.highlight_revert_ms,
                    });
                }
            }
            _ => {}
        }
        tracing::debug!("sentence: {:?}", self.sentence.as_str());
    }

    fn apply_speech(&mut self, intent: Intent) {
        let result = match intent {
            Intent::Speak => {
                let text = self.sentence.spoken_text();
                if text.is_empty() {
                    tracing::debug!("nothing to speak");
                    return;
                }
                self.speech.speak(text)
            }
            Intent::StopSpeak => self.speech.stop(),
            _ => Ok(()),
        };
        if let Err(e) = result {
            tracing::warn!("speech failed: {e}");
        }
    }
}
