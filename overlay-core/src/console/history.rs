//! Append-only console history with a recall cursor.

use crate::ui::HistoryDirection;

/// Every submitted line and every logged message, oldest first.
///
/// `cursor` is `None` while the user is not browsing. Any append cancels
/// browsing, so a `Some` cursor always indexes the entry the user last
/// recalled.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<String>,
    cursor: Option<usize>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push(entry.into());
        self.cursor = None;
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn is_browsing(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = None;
    }

    /// Move the recall cursor. Returns the text the input line should now
    /// hold (`""` when browsing ends), or `None` when nothing changes.
    pub fn navigate(&mut self, direction: HistoryDirection) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;

        match direction {
            HistoryDirection::Up => {
                let idx = match self.cursor {
                    None => last,
                    Some(i) if i > 0 => i - 1,
                    Some(i) => i,
                };
                self.cursor = Some(idx);
                Some(&self.entries[idx])
            }
            HistoryDirection::Down => {
                let current = self.cursor?;
                if current < last {
                    self.cursor = Some(current + 1);
                    Some(&self.entries[current + 1])
                } else {
                    self.cursor = None;
                    Some("")
                }
            }
        }
    }
}
