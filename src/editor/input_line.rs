//! Single-line text buffer with a char-indexed cursor.

/// Text typed since the last submission.
///
/// The cursor is tracked in char indices (never bytes) so multi-byte input
/// cannot split a UTF-8 sequence. It always stays within `[0, len]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    cursor: usize,
}

impl InputLine {
    /// Current buffered text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of chars in the buffer.
    pub fn len(&self) -> usize {
        char_count(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// True when the cursor sits after the last char.
    pub fn cursor_at_end(&self) -> bool {
        self.cursor == self.len()
    }

    /// Chars from the cursor to the end of the line.
    pub fn tail(&self) -> &str {
        &self.text[byte_index_at_char(&self.text, self.cursor)..]
    }

    /// Insert one char at the cursor and advance past it.
    pub fn insert(&mut self, ch: char) {
        let byte_idx = byte_index_at_char(&self.text, self.cursor);
        self.text.insert(byte_idx, ch);
        self.cursor += 1;
    }

    /// Delete the char before the cursor. Returns false on an empty prefix.
    pub fn delete_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = byte_index_at_char(&self.text, self.cursor - 1);
        let end = byte_index_at_char(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Move the cursor one char left. Returns whether it moved.
    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor one char right. Returns whether it moved.
    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Convert a char index to a byte index, preserving UTF-8 boundaries.
pub(crate) fn byte_index_at_char(s: &str, char_idx: usize) -> usize {
    if char_idx == 0 {
        return 0;
    }
    s.char_indices()
        .nth(char_idx)
        .map(|(idx, _)| idx)
        .unwrap_or(s.len())
}

/// Return total char count for a UTF-8 string.
pub(crate) fn char_count(s: &str) -> usize {
    s.chars().count()
}
