//! Command history and recall
//!
//! History records every execution attempt, valid or not, in order. Recall
//! steps through entries most-recent-first: index 0 is the last command
//! entered, stepping past the oldest clamps, and stepping forward past the
//! newest returns to the no-selection state so the host can clear its
//! input buffer.

/// In-memory command history with a recall cursor
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    /// Raw input strings, oldest first
    entries: Vec<String>,
    /// Recall index: 0 = most recent entry, `None` = no selection
    cursor: Option<usize>,
}

impl CommandHistory {
    /// Create an empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an execution attempt and reset the recall cursor
    pub fn push(&mut self, raw: impl Into<String>) {
        self.entries.push(raw.into());
        self.cursor = None;
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of recorded attempts
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no attempts have been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a recall index (0 = most recent)
    pub fn recall(&self, index: usize) -> Option<&str> {
        if index >= self.entries.len() {
            return None;
        }
        self.entries
            .get(self.entries.len() - 1 - index)
            .map(String::as_str)
    }

    /// Step to the previous (older) entry, clamping at the oldest
    ///
    /// Returns `None` only when the history is empty.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next_index = match self.cursor {
            None => 0,
            Some(index) => (index + 1).min(self.entries.len() - 1),
        };
        self.cursor = Some(next_index);
        self.recall(next_index)
    }

    /// Step to the next (newer) entry
    ///
    /// Stepping past the newest entry clears the selection and returns
    /// `None`; the host clears its input buffer in response.
    pub fn next(&mut self) -> Option<&str> {
        match self.cursor {
            None | Some(0) => {
                self.cursor = None;
                None
            }
            Some(index) => {
                self.cursor = Some(index - 1);
                self.recall(index - 1)
            }
        }
    }

    /// Drop the current recall selection
    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }
}
