use eyespeak_config::schema::Screen;

/// Letters screen contents: A–Z, 0–9, then a space item.
fn letter_items() -> Vec<String> {
    ('A'..='Z')
        .chain('0'..='9')
        .chain(std::iter::once(' '))
        .map(String::from)
        .collect()
}

/// The item grids and which item is highlighted on each.
///
/// Each screen keeps its own active index, so switching screens returns
/// to where the user left off.
#[derive(Debug, Clone)]
pub struct Selection {
    words: Vec<String>,
    letters: Vec<String>,
    screen: Screen,
    word_index: usize,
    letter_index: usize,
}

impl Selection {
    pub fn new(words: Vec<String>, screen: Screen) -> Self {
        Self {
            words,
            letters: letter_items(),
            screen,
            word_index: 0,
            letter_index: 0,
        }
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn set_screen(&mut self, screen: Screen) {
        if self.screen != screen {
            tracing::debug!("switched to {screen:?} screen");
            self.screen = screen;
        }
    }

    pub fn items(&self) -> &[String] {
        match self.screen {
            Screen::Words => &self.words,
            Screen::Letters => &self.letters,
        }
    }

    pub fn active_index(&self) -> usize {
        match self.screen {
            Screen::Words => self.word_index,
            Screen::Letters => self.letter_index,
        }
    }

    pub fn active_item(&self) -> Option<&str> {
        self.items().get(self.active_index()).map(String::as_str)
    }

    /// Highlight `index` on the current screen. Out-of-range indices are ignored.
    pub fn set_active(&mut self, index: usize) {
        if index >= self.items().len() {
            return;
        }
        match self.screen {
            Screen::Words => self.word_index = index,
            Screen::Letters => self.letter_index = index,
        }
    }

    pub fn next(&mut self) {
        let len = self.items().len();
        if len > 0 {
            self.set_active((self.active_index() + 1) % len);
        }
    }

    pub fn prev(&mut self) {
        let len = self.items().len();
        if len > 0 {
            self.set_active((self.active_index() + len - 1) % len);
        }
    }

    /// Index of the space item, when the current screen has one.
    pub fn space_index(&self) -> Option<usize> {
        match self.screen {
            Screen::Words => None,
            Screen::Letters => self.letters.iter().position(|item| item == " "),
        }
    }
}
