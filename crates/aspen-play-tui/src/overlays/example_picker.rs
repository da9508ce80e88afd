//! Example picker overlay.
//!
//! A centered modal list of the example catalog. Up/Down moves, Enter
//! accepts (the reducer replaces the buffer wholesale), Esc closes.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState};

use aspen_play_core::examples::ExampleEntry;

/// Picker state: the highlighted catalog index.
#[derive(Debug, Default)]
pub struct ExamplePickerState {
    pub selected: usize,
}

/// What the reducer should do after a picker key press.
#[derive(Debug, PartialEq, Eq)]
pub enum PickerAction {
    /// Keep the picker open.
    None,
    /// Close without selecting.
    Close,
    /// Replace the buffer with catalog entry `i`.
    Accept(usize),
}

impl ExamplePickerState {
    /// Handles a key press while the picker is open.
    pub fn handle_key(&mut self, catalog_len: usize, key: KeyEvent) -> PickerAction {
        match key.code {
            KeyCode::Esc => PickerAction::Close,
            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
                PickerAction::None
            }
            KeyCode::Down => {
                if self.selected + 1 < catalog_len {
                    self.selected += 1;
                }
                PickerAction::None
            }
            KeyCode::Enter if catalog_len > 0 => PickerAction::Accept(self.selected),
            _ => PickerAction::None,
        }
    }
}

/// Renders the picker centered over the given area.
pub fn render(frame: &mut Frame, area: Rect, catalog: &[ExampleEntry], state: &ExamplePickerState) {
    let height = (catalog.len() as u16 + 2).min(area.height.saturating_sub(2)).max(3);
    let width = 36.min(area.width.saturating_sub(2)).max(10);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let items: Vec<ListItem> = catalog
        .iter()
        .map(|example| ListItem::new(Line::from(example.name.clone())))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Examples"))
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        );

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(catalog.len().saturating_sub(1))));

    frame.render_widget(Clear, popup);
    frame.render_stateful_widget(list, popup, &mut list_state);
}
