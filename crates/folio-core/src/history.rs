//! Input history and arrow-key recall.
//!
//! Submitted lines are stored most-recent-first. The recall cursor walks
//! that list: `None` means "not recalling", `Some(i)` means the buffer
//! currently shows entry `i`.

/// What the host should do with its input buffer after a recall request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recall {
    /// Replace the buffer with this previously submitted line.
    Replace(String),
    /// Clear the buffer (stepped forward past the newest entry).
    Clear,
    /// Leave the buffer as it is.
    Keep,
}

/// Session-scoped record of submitted command lines.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    /// Raw trimmed inputs, most recent first. Unbounded: a session is short.
    entries: Vec<String>,
    /// Recall cursor; `None` when not recalling.
    cursor: Option<usize>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a submitted line and resets the recall cursor.
    pub fn record(&mut self, line: impl Into<String>) {
        self.entries.insert(0, line.into());
        self.cursor = None;
    }

    /// Number of recorded lines.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Steps the cursor toward older entries (arrow-up).
    ///
    /// Clamped at the oldest entry: recalling past it keeps the buffer.
    pub fn recall_older(&mut self) -> Recall {
        let next = match self.cursor {
            None if !self.entries.is_empty() => 0,
            Some(i) if i + 1 < self.entries.len() => i + 1,
            _ => return Recall::Keep,
        };
        self.cursor = Some(next);
        Recall::Replace(self.entries[next].clone())
    }

    /// Steps the cursor toward newer entries (arrow-down).
    ///
    /// Stepping forward from the newest entry clears the buffer and leaves
    /// recall mode; stepping while not recalling does nothing.
    pub fn recall_newer(&mut self) -> Recall {
        match self.cursor {
            Some(0) => {
                self.cursor = None;
                Recall::Clear
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                Recall::Replace(self.entries[i - 1].clone())
            }
            None => Recall::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history_with(lines: &[&str]) -> CommandHistory {
        let mut history = CommandHistory::new();
        // record() prepends, so submit oldest first
        for line in lines.iter().rev() {
            history.record(*line);
        }
        history
    }

    #[test]
    fn test_recall_on_empty_history_keeps_buffer() {
        let mut history = CommandHistory::new();
        assert_eq!(history.recall_older(), Recall::Keep);
        assert_eq!(history.recall_newer(), Recall::Keep);
    }

    #[test]
    fn test_recall_sequence() {
        // Most recent first: "about" was typed after "skills".
        let mut history = history_with(&["about", "skills"]);

        assert_eq!(history.recall_older(), Recall::Replace("about".into()));
        assert_eq!(history.recall_older(), Recall::Replace("skills".into()));
        // Clamped at the oldest entry
        assert_eq!(history.recall_older(), Recall::Keep);

        assert_eq!(history.recall_newer(), Recall::Replace("about".into()));
        assert_eq!(history.recall_newer(), Recall::Clear);
        assert_eq!(history.recall_newer(), Recall::Keep);
    }

    #[test]
    fn test_record_resets_cursor() {
        let mut history = history_with(&["about", "skills"]);
        history.recall_older();
        history.recall_older();

        history.record("contact");

        // Cursor starts over from the newest entry
        assert_eq!(history.recall_older(), Recall::Replace("contact".into()));
    }

    #[test]
    fn test_newest_entry_is_first() {
        let mut history = CommandHistory::new();
        history.record("first");
        history.record("second");
        assert_eq!(history.recall_older(), Recall::Replace("second".into()));
    }
}
