//! Text buffer for the playground editor.
//!
//! Owns the source text plus a caret expressed as a pair of char offsets
//! `(start, end)` with `start <= end <= char length`. An empty selection has
//! `start == end`. The selection anchor is tracked separately from the moving
//! end so Shift-extended movement works in either direction; `selection()`
//! always returns the ordered pair.

/// The fixed four-space literal inserted for Tab.
pub const INDENT: &str = "    ";

/// Counts gutter rows for a text: newline segments, never less than one.
///
/// A trailing newline starts a new, currently-empty line that still gets a
/// gutter row, and the empty buffer has one editable line.
pub fn count_lines(text: &str) -> usize {
    text.split('\n').count()
}

/// Cursor movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Forward,
    Back,
    Head,
    End,
    Top,
    Bottom,
}

/// Editable source buffer with a linear-offset caret.
#[derive(Debug, Clone, Default)]
pub struct EditBuffer {
    text: String,
    /// Fixed end of the selection, in chars.
    anchor: usize,
    /// Moving end of the selection (where the cursor blinks), in chars.
    cursor: usize,
}

impl EditBuffer {
    /// Creates a buffer seeded with the given text, caret at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            anchor: 0,
            cursor: 0,
        }
    }

    /// Returns the full buffer text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the buffer length in chars.
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns the ordered selection `(start, end)` in char offsets.
    pub fn selection(&self) -> (usize, usize) {
        if self.anchor <= self.cursor {
            (self.anchor, self.cursor)
        } else {
            (self.cursor, self.anchor)
        }
    }

    /// Returns true if the selection is non-empty.
    pub fn has_selection(&self) -> bool {
        self.anchor != self.cursor
    }

    /// Returns the cursor position as `(row, col)` in char units.
    pub fn cursor_row_col(&self) -> (usize, usize) {
        self.offset_to_row_col(self.cursor)
    }

    /// Returns the number of lines (always >= 1).
    pub fn line_count(&self) -> usize {
        count_lines(&self.text)
    }

    /// Iterates over the buffer's lines, including a trailing empty one.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.split('\n')
    }

    /// Replaces the whole buffer and resets the caret to `(0, 0)`.
    ///
    /// Used when an example is selected.
    pub fn replace_all(&mut self, text: &str) {
        self.text = text.to_string();
        self.anchor = 0;
        self.cursor = 0;
    }

    /// Inserts text at the caret, replacing any selection; the caret
    /// collapses after the inserted text.
    pub fn insert_str(&mut self, insert: &str) {
        let (start, end) = self.selection();
        let start_byte = self.char_to_byte(start);
        let end_byte = self.char_to_byte(end);
        self.text.replace_range(start_byte..end_byte, insert);
        let caret = start + insert.chars().count();
        self.anchor = caret;
        self.cursor = caret;
    }

    /// Inserts a single character at the caret.
    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Inserts a newline at the caret.
    pub fn insert_newline(&mut self) {
        self.insert_str("\n");
    }

    /// The Tab interception: inserts the fixed four-space indent.
    ///
    /// Any selection is deleted (not indented line by line) and the caret
    /// collapses to `end + 4 - (end - start)`, i.e. just after the indent.
    /// With no selection this is `end + 4`.
    pub fn insert_indent(&mut self) {
        let (start, end) = self.selection();
        let start_byte = self.char_to_byte(start);
        let end_byte = self.char_to_byte(end);
        let new_text = format!(
            "{}{}{}",
            &self.text[..start_byte],
            INDENT,
            &self.text[end_byte..]
        );
        self.text = new_text;
        let caret = end + INDENT.len() - (end - start);
        self.anchor = caret;
        self.cursor = caret;
    }

    /// Deletes the selection, or the char before the cursor (Backspace).
    pub fn delete_prev_char(&mut self) {
        if self.has_selection() {
            self.insert_str("");
            return;
        }
        if self.cursor == 0 {
            return;
        }
        let start_byte = self.char_to_byte(self.cursor - 1);
        let end_byte = self.char_to_byte(self.cursor);
        self.text.replace_range(start_byte..end_byte, "");
        self.cursor -= 1;
        self.anchor = self.cursor;
    }

    /// Deletes the selection, or the char at the cursor (Delete).
    pub fn delete_next_char(&mut self) {
        if self.has_selection() {
            self.insert_str("");
            return;
        }
        if self.cursor >= self.char_len() {
            return;
        }
        let start_byte = self.char_to_byte(self.cursor);
        let end_byte = self.char_to_byte(self.cursor + 1);
        self.text.replace_range(start_byte..end_byte, "");
    }

    /// Selects the whole buffer, cursor at the end.
    pub fn select_all(&mut self) {
        self.anchor = 0;
        self.cursor = self.char_len();
    }

    /// Moves the cursor. With `extend` the anchor stays put (Shift
    /// selection); otherwise the selection collapses.
    pub fn move_cursor(&mut self, movement: CursorMove, extend: bool) {
        // A plain horizontal move with an active selection collapses to the
        // selection edge instead of moving past it.
        if !extend && self.has_selection() {
            let (start, end) = self.selection();
            match movement {
                CursorMove::Back => {
                    self.anchor = start;
                    self.cursor = start;
                    return;
                }
                CursorMove::Forward => {
                    self.anchor = end;
                    self.cursor = end;
                    return;
                }
                _ => {}
            }
        }

        let (row, col) = self.offset_to_row_col(self.cursor);
        let target = match movement {
            CursorMove::Forward => (self.cursor + 1).min(self.char_len()),
            CursorMove::Back => self.cursor.saturating_sub(1),
            CursorMove::Up => {
                if row == 0 {
                    self.cursor
                } else {
                    self.row_col_to_offset(row - 1, col)
                }
            }
            CursorMove::Down => {
                if row + 1 >= self.line_count() {
                    self.cursor
                } else {
                    self.row_col_to_offset(row + 1, col)
                }
            }
            CursorMove::Head => self.row_col_to_offset(row, 0),
            CursorMove::End => self.row_col_to_offset(row, usize::MAX),
            CursorMove::Top => 0,
            CursorMove::Bottom => self.char_len(),
        };

        self.cursor = target;
        if !extend {
            self.anchor = target;
        }
    }

    /// Maps a char offset to `(row, col)`.
    pub fn offset_to_row_col(&self, offset: usize) -> (usize, usize) {
        let mut remaining = offset;
        for (row, line) in self.lines().enumerate() {
            let len = line.chars().count();
            if remaining <= len {
                return (row, remaining);
            }
            remaining -= len + 1; // +1 for the newline
        }
        let last = self.line_count() - 1;
        (last, self.lines().last().map_or(0, |l| l.chars().count()))
    }

    /// Maps `(row, col)` to a char offset, clamping col to the line length.
    pub fn row_col_to_offset(&self, row: usize, col: usize) -> usize {
        let mut offset = 0;
        for (i, line) in self.lines().enumerate() {
            let len = line.chars().count();
            if i == row {
                return offset + col.min(len);
            }
            offset += len + 1;
        }
        self.char_len()
    }

    fn char_to_byte(&self, offset: usize) -> usize {
        if offset == 0 {
            return 0;
        }
        self.text
            .char_indices()
            .nth(offset)
            .map_or(self.text.len(), |(i, _)| i)
    }
}
