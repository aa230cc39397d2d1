//! Ties the gesture session to the composer: each frame is interpreted
//! and every fired intent is applied in order.

use eyespeak_common::Intent;
use eyespeak_config::schema::Screen;
use eyespeak_config::EyespeakConfig;
use eyespeak_gesture::GestureSession;

use crate::composer::{Composer, SpeechSink};
use crate::source::FrameRecord;

pub struct EyespeakApp {
    session: GestureSession,
    composer: Composer,
    frames: u64,
    intents: u64,
}

impl EyespeakApp {
    pub fn new(config: &EyespeakConfig, speech: Box<dyn SpeechSink>) -> Self {
        Self {
            session: GestureSession::new(config),
            composer: Composer::new(&config.composer, speech),
            frames: 0,
            intents: 0,
        }
    }

    pub fn with_screen(mut self, screen: Screen) -> Self {
        self.composer.set_screen(screen);
        self
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    /// Number of frames and intents handled so far.
    pub fn stats(&self) -> (u64, u64) {
        (self.frames, self.intents)
    }

    pub fn handle_frame(&mut self, record: &FrameRecord) -> Vec<Intent> {
        self.frames += 1;
        self.composer.tick(record.t);

        let intents = self.session.process_frame(record.landmarks.as_ref(), record.t);
        for &intent in &intents {
            self.composer.apply(intent, record.t);
        }
        self.intents += intents.len() as u64;
        intents
    }
}
