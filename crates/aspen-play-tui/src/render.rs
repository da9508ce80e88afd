//! Pure view/render functions for the playground TUI.
//!
//! Functions here take `&AppState` by immutable reference, draw to a
//! ratatui Frame, and never mutate state or return effects.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::features::{editor, output};
use crate::overlays::{self, Overlay};
use crate::state::AppState;

/// Height of the output pane, including its borders.
pub const OUTPUT_HEIGHT: u16 = 12;

/// Height of the status line below the output pane.
pub const STATUS_HEIGHT: u16 = 1;

/// Rows available to the editor text surface for a given terminal height.
///
/// Mirrors the layout below; the reducer uses it to keep the caret visible.
pub fn editor_text_height(terminal_height: u16) -> u16 {
    terminal_height.saturating_sub(OUTPUT_HEIGHT + STATUS_HEIGHT)
}

/// Renders the entire TUI to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    let state = &app.tui;

    let [editor_area, output_area, status_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(OUTPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .areas(area);

    editor::render::render(frame, editor_area, &state.editor, app.overlay.is_none());
    output::render::render(frame, output_area, &state.output);
    render_status_line(frame, status_area, &state.endpoint);

    if let Some(Overlay::ExamplePicker(picker)) = &app.overlay {
        overlays::example_picker::render(frame, area, &state.catalog, picker);
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, endpoint: &str) {
    if area.height == 0 {
        return;
    }

    let hints = "ctrl+r run  ctrl+o examples  ctrl+c quit";
    let mut spans = vec![Span::styled(hints, Style::default().fg(Color::DarkGray))];

    // Right-align the endpoint when there is room for both.
    let used = hints.len() as u16;
    let endpoint_len = endpoint.len() as u16;
    if area.width > used + endpoint_len + 2 {
        let pad = area.width - used - endpoint_len;
        spans.push(Span::raw(" ".repeat(pad as usize)));
        spans.push(Span::styled(
            endpoint.to_string(),
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
