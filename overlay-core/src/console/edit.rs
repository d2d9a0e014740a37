//! Bounded single-line text edit.
//!
//! The (text, cursor, selection) triple a text field exposes to its owner.
//! The capacity is enforced here, on every mutation, so no caller can grow
//! the buffer past it. Cursor and selection are character indices.

use std::ops::Range;

/// Maximum characters accepted by the console input line.
pub const DEFAULT_INPUT_CAPACITY: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    text: String,
    capacity: usize,
    cursor: usize,
    selection: Range<usize>,
    dirty: bool,
}

impl Default for TextEdit {
    fn default() -> Self {
        Self::new(DEFAULT_INPUT_CAPACITY)
    }
}

impl TextEdit {
    pub fn new(capacity: usize) -> Self {
        Self {
            text: String::new(),
            capacity,
            cursor: 0,
            selection: 0..0,
            dirty: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Whether the text was replaced wholesale since the last `take_dirty`.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    // ── Wholesale replacement ────────────────────────────────────────

    /// Replace the whole text, truncated to capacity, with the cursor and an
    /// empty selection at the end.
    pub fn replace(&mut self, text: &str) {
        self.text = truncate_chars(text, self.capacity).to_string();
        let end = self.char_count();
        self.cursor = end;
        self.selection = end..end;
        self.dirty = true;
    }

    pub fn clear(&mut self) {
        self.replace("");
    }

    /// Take the text out, leaving the edit empty.
    pub fn take_text(&mut self) -> String {
        let text = std::mem::take(&mut self.text);
        self.cursor = 0;
        self.selection = 0..0;
        self.dirty = true;
        text
    }

    // ── Cursor ───────────────────────────────────────────────────────

    /// Move the cursor, collapsing the selection. Clamped to the text.
    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.char_count());
        self.selection = self.cursor..self.cursor;
    }

    /// Select `range` (clamped to the text) with the cursor at its end.
    pub fn set_selection(&mut self, range: Range<usize>) {
        let count = self.char_count();
        let end = range.end.min(count);
        let start = range.start.min(end);
        self.selection = start..end;
        self.cursor = end;
    }
}

/// The longest prefix of `s` holding at most `max_chars` characters.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((byte, _)) => &s[..byte],
        None => s,
    }
}
