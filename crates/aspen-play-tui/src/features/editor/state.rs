//! Editor viewport state.

use super::EditBuffer;

/// Editor pane state: the buffer plus scroll position and the last known
/// viewport size (updated on every frame, used to keep the caret visible).
#[derive(Debug, Default)]
pub struct EditorState {
    /// The source buffer and caret.
    pub buffer: EditBuffer,
    /// First visible row of the text surface. The gutter renders with this
    /// same offset, which keeps both in lock-step.
    pub scroll_top: usize,
    /// Height of the text surface in rows, from the last frame.
    pub viewport_height: usize,
}

impl EditorState {
    /// Creates an editor seeded with the given text.
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: EditBuffer::from_text(text),
            scroll_top: 0,
            viewport_height: 0,
        }
    }

    /// Replaces the buffer wholesale (example selection): caret to `(0, 0)`,
    /// scroll to the top.
    pub fn load_text(&mut self, text: &str) {
        self.buffer.replace_all(text);
        self.scroll_top = 0;
    }

    /// Scrolls by a signed number of rows, clamped to the buffer.
    pub fn scroll_by(&mut self, delta: isize) {
        let max = self.buffer.line_count().saturating_sub(1);
        let target = self.scroll_top.saturating_add_signed(delta);
        self.scroll_top = target.min(max);
    }

    /// Records the text surface height for this frame and re-clamps scroll.
    pub fn set_viewport_height(&mut self, height: usize) {
        self.viewport_height = height;
        let max = self.buffer.line_count().saturating_sub(1);
        self.scroll_top = self.scroll_top.min(max);
    }

    /// Scrolls the minimum amount needed to keep the cursor row visible.
    pub fn ensure_cursor_visible(&mut self) {
        if self.viewport_height == 0 {
            return;
        }
        let (row, _) = self.buffer.cursor_row_col();
        if row < self.scroll_top {
            self.scroll_top = row;
        } else if row >= self.scroll_top + self.viewport_height {
            self.scroll_top = row + 1 - self.viewport_height;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_text_resets_caret_and_scroll() {
        let mut editor = EditorState::with_text("a\nb\nc\nd\ne");
        editor.scroll_top = 3;
        editor.load_text("x\ny");
        assert_eq!(editor.buffer.text(), "x\ny");
        assert_eq!(editor.buffer.selection(), (0, 0));
        assert_eq!(editor.scroll_top, 0);
    }

    #[test]
    fn scroll_clamps_to_last_line() {
        let mut editor = EditorState::with_text("a\nb\nc");
        editor.scroll_by(10);
        assert_eq!(editor.scroll_top, 2);
        editor.scroll_by(-10);
        assert_eq!(editor.scroll_top, 0);
    }

    #[test]
    fn cursor_is_kept_inside_the_viewport() {
        let mut editor = EditorState::with_text("a\nb\nc\nd\ne\nf");
        editor.set_viewport_height(3);

        editor.buffer.move_cursor(super::super::CursorMove::Bottom, false);
        editor.ensure_cursor_visible();
        assert_eq!(editor.scroll_top, 3);

        editor.buffer.move_cursor(super::super::CursorMove::Top, false);
        editor.ensure_cursor_visible();
        assert_eq!(editor.scroll_top, 0);
    }
}
