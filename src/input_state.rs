//! Input state management for message composition and history recall.

/// Manages the compose field and arrow-key history navigation.
#[derive(Default)]
pub struct InputState {
    /// Current message being composed
    pub message_input: String,

    /// Previously submitted lines (for up/down arrow navigation)
    pub history: Vec<String>,

    /// Current position in history (None = not navigating)
    pub history_pos: Option<usize>,

    /// Saved input when entering history mode
    pub history_saved_input: Option<String>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the composed text for submission.
    ///
    /// Trims the input; whitespace-only input yields `None` and leaves the
    /// field untouched. Otherwise the trimmed text is returned, remembered in
    /// the history, and the field is cleared.
    pub fn take_submission(&mut self) -> Option<String> {
        let text = self.message_input.trim();
        if text.is_empty() {
            return None;
        }
        let text = text.to_string();
        self.history.push(text.clone());
        self.message_input.clear();
        self.reset_navigation();
        Some(text)
    }

    /// Recall the previous history entry into the compose field.
    pub fn navigate_up(&mut self) {
        if self.history.is_empty() {
            return;
        }
        match self.history_pos {
            None => {
                // store current text to restore if the user navigates back down
                self.history_saved_input = Some(self.message_input.clone());
                self.history_pos = Some(self.history.len() - 1);
            }
            Some(pos) if pos > 0 => self.history_pos = Some(pos - 1),
            Some(_) => {}
        }
        if let Some(pos) = self.history_pos {
            if let Some(line) = self.history.get(pos) {
                self.message_input = line.clone();
            }
        }
    }

    /// Move forward in history, restoring the saved draft past the end.
    pub fn navigate_down(&mut self) {
        if let Some(pos) = self.history_pos {
            if pos + 1 < self.history.len() {
                self.history_pos = Some(pos + 1);
                if let Some(line) = self.history.get(pos + 1) {
                    self.message_input = line.clone();
                }
            } else {
                self.history_pos = None;
                self.message_input = self.history_saved_input.take().unwrap_or_default();
            }
        }
    }

    pub fn reset_navigation(&mut self) {
        self.history_pos = None;
        self.history_saved_input = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_submission_trims_and_clears() {
        let mut input = InputState::new();
        input.message_input = "  hello  ".into();

        assert_eq!(input.take_submission(), Some("hello".to_string()));
        assert!(input.message_input.is_empty());
        assert_eq!(input.history, vec!["hello"]);
    }

    #[test]
    fn test_whitespace_only_submission_is_a_noop() {
        let mut input = InputState::new();
        input.message_input = "   \t".into();

        assert_eq!(input.take_submission(), None);
        // Field keeps its content; nothing is remembered.
        assert_eq!(input.message_input, "   \t");
        assert!(input.history.is_empty());
    }

    #[test]
    fn test_history_navigation_roundtrip() {
        let mut input = InputState::new();
        input.message_input = "first".into();
        input.take_submission();
        input.message_input = "second".into();
        input.take_submission();

        input.message_input = "draft".into();
        input.navigate_up();
        assert_eq!(input.message_input, "second");
        input.navigate_up();
        assert_eq!(input.message_input, "first");
        input.navigate_up();
        assert_eq!(input.message_input, "first"); // clamped at oldest

        input.navigate_down();
        assert_eq!(input.message_input, "second");
        input.navigate_down();
        assert_eq!(input.message_input, "draft"); // draft restored
        assert_eq!(input.history_pos, None);
    }
}
