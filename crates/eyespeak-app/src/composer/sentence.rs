/// The sentence being composed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sentence {
    text: String,
}

impl Sentence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Append a whole word followed by a separating space.
    pub fn push_word(&mut self, word: &str) {
        self.text.push_str(word);
        self.text.push(' ');
    }

    /// Append a single letters-screen item verbatim.
    pub fn push_item(&mut self, item: &str) {
        self.text.push_str(item);
    }

    pub fn push_space(&mut self) {
        self.text.push(' ');
    }

    /// Drop the last space-separated word, keeping a trailing space after
    /// whatever remains.
    pub fn delete_last_word(&mut self) {
        let mut words: Vec<&str> = self.text.split_whitespace().collect();
        words.pop();
        self.text = if words.is_empty() {
            String::new()
        } else {
            format!("{} ", words.join(" "))
        };
    }

    pub fn delete_last_char(&mut self) {
        self.text.pop();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// The text handed to speech: trimmed of surrounding whitespace.
    pub fn spoken_text(&self) -> &str {
        self.text.trim()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_space_separated() {
        let mut sentence = Sentence::new();
        sentence.push_word("I");
        sentence.push_word("want");
        sentence.push_word("water");
        assert_eq!(sentence.as_str(), "I want water ");
        assert_eq!(sentence.spoken_text(), "I want water");
    }

    #[test]
    fn delete_last_word() {
        let mut sentence = Sentence::new();
        sentence.push_word("I");
        sentence.push_word("want");
        sentence.delete_last_word();
        assert_eq!(sentence.as_str(), "I ");
        sentence.delete_last_word();
        assert_eq!(sentence.as_str(), "");
        sentence.delete_last_word();
        assert!(sentence.is_empty());
    }

    #[test]
    fn delete_last_word_counts_phrase_parts() {
        let mut sentence = Sentence::new();
        sentence.push_word("thanks");
        sentence.push_word("a lot");
        sentence.delete_last_word();
        assert_eq!(sentence.as_str(), "thanks a ");
    }

    #[test]
    fn letters_and_characters() {
        let mut sentence = Sentence::new();
        sentence.push_item("H");
        sentence.push_item("I");
        sentence.push_space();
        assert_eq!(sentence.as_str(), "HI ");
        sentence.delete_last_char();
        sentence.delete_last_char();
        assert_eq!(sentence.as_str(), "H");
    }

    #[test]
    fn delete_char_on_empty_is_noop() {
        let mut sentence = Sentence::new();
        sentence.delete_last_char();
        assert!(sentence.is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut sentence = Sentence::new();
        sentence.push_word("hello");
        sentence.clear();
        assert!(sentence.is_empty());
        assert_eq!(sentence.spoken_text(), "");
    }
}
