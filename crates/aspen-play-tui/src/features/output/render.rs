//! Output pane view.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::{OutputState, RunState};

/// Renders the output pane. The text is shown verbatim, no wrapping, no
/// interpretation of its content.
pub fn render(frame: &mut Frame, area: Rect, output: &OutputState) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let style = match output.run() {
        RunState::Waiting => Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        RunState::Failed { .. } => Style::default().fg(Color::Red),
        RunState::Idle | RunState::Succeeded { .. } => Style::default(),
    };

    let pane = Paragraph::new(output.display_text())
        .style(style)
        .block(Block::default().borders(Borders::ALL).title("Output"));
    frame.render_widget(pane, area);
}
