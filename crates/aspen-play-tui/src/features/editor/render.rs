//! Editor feature view.
//!
//! Renders the line-number gutter and the text surface side by side. Both
//! are drawn with the same scroll offset, so the gutter position is a pure
//! function of the text surface's scroll: they can never drift apart. A
//! zero-sized area (teardown, extreme resize) renders nothing and is not an
//! error.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthChar;

use super::state::EditorState;

/// Style for the line-number column.
fn gutter_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for selected text.
fn selection_style() -> Style {
    Style::default().bg(Color::Blue).fg(Color::White)
}

/// Width of the gutter for a given line count: digits plus one space of
/// padding, never narrower than three cells.
pub fn gutter_width(line_count: usize) -> u16 {
    let digits = line_count.max(1).ilog10() as u16 + 1;
    (digits + 1).max(3)
}

/// One right-aligned label per line, `1..=line_count`.
pub fn gutter_labels(line_count: usize) -> Vec<Line<'static>> {
    (1..=line_count)
        .map(|n| Line::from(n.to_string()).alignment(Alignment::Right))
        .collect()
}

/// Renders the editor pane and places the terminal cursor.
pub fn render(frame: &mut Frame, area: Rect, editor: &EditorState, show_cursor: bool) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let line_count = editor.buffer.line_count();
    let [gutter_area, text_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(gutter_width(line_count)),
            Constraint::Min(1),
        ])
        .areas(area);

    let scroll = editor.scroll_top as u16;

    let gutter = Paragraph::new(gutter_labels(line_count))
        .style(gutter_style())
        .scroll((scroll, 0));
    frame.render_widget(gutter, gutter_area);

    let text = Paragraph::new(styled_lines(editor)).scroll((scroll, 0));
    frame.render_widget(text, text_area);

    if show_cursor {
        let (row, col) = editor.buffer.cursor_row_col();
        if row >= editor.scroll_top && row < editor.scroll_top + area.height as usize {
            let line = editor.buffer.lines().nth(row).unwrap_or("");
            let x_offset: usize = line
                .chars()
                .take(col)
                .map(|ch| ch.width().unwrap_or(0))
                .sum();
            let x = text_area.x + (x_offset as u16).min(text_area.width.saturating_sub(1));
            let y = text_area.y + (row - editor.scroll_top) as u16;
            frame.set_cursor_position((x, y));
        }
    }
}

/// Builds the buffer's lines with the selection highlighted.
fn styled_lines(editor: &EditorState) -> Vec<Line<'static>> {
    let (sel_start, sel_end) = editor.buffer.selection();
    let mut lines = Vec::with_capacity(editor.buffer.line_count());
    let mut offset = 0usize;

    for line in editor.buffer.lines() {
        let len = line.chars().count();
        let line_start = offset;
        let line_end = offset + len;
        offset = line_end + 1; // +1 for the newline

        if sel_start == sel_end || sel_end <= line_start || sel_start >= line_end {
            lines.push(Line::from(line.to_string()));
            continue;
        }

        let from = sel_start.saturating_sub(line_start).min(len);
        let to = sel_end.saturating_sub(line_start).min(len);
        let chars: Vec<char> = line.chars().collect();
        let pre: String = chars[..from].iter().collect();
        let sel: String = chars[from..to].iter().collect();
        let post: String = chars[to..].iter().collect();

        let mut spans = Vec::with_capacity(3);
        if !pre.is_empty() {
            spans.push(Span::raw(pre));
        }
        spans.push(Span::styled(sel, selection_style()));
        if !post.is_empty() {
            spans.push(Span::raw(post));
        }
        lines.push(Line::from(spans));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gutter_has_one_label_per_line() {
        let labels = gutter_labels(3);
        assert_eq!(labels.len(), 3);
        assert_eq!(labels[0].to_string(), "1");
        assert_eq!(labels[2].to_string(), "3");
    }

    #[test]
    fn gutter_width_grows_with_line_count() {
        assert_eq!(gutter_width(1), 3);
        assert_eq!(gutter_width(99), 3);
        assert_eq!(gutter_width(100), 4);
        assert_eq!(gutter_width(12345), 6);
    }
}
