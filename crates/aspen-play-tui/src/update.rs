//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects. Events arrive one at a time, in
//! dispatch order, which makes this the single serialized owner of buffer,
//! caret and run-state mutations.

use crossterm::event::{Event, MouseEventKind};

use crate::events::UiEvent;
use crate::effects::UiEffect;
use crate::features::editor;
use crate::overlays::{ExamplePickerState, Overlay, PickerAction};
use crate::render;
use crate::state::AppState;

/// Rows scrolled per mouse-wheel notch.
const WHEEL_SCROLL_ROWS: isize = 3;

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Frame { width: _, height } => {
            let text_height = render::editor_text_height(height);
            app.tui.editor.set_viewport_height(text_height as usize);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::RunFinished { seq, result } => {
            // Newest-issued-wins: a superseded run's response is discarded
            // here instead of overwriting fresher state.
            if !app.tui.output.finish(seq, result) {
                tracing::debug!(?seq, "discarded stale run response");
            }
            vec![]
        }
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => {
            if let Some(Overlay::ExamplePicker(picker)) = app.overlay.as_mut() {
                match picker.handle_key(app.tui.catalog.len(), key) {
                    PickerAction::None => {}
                    PickerAction::Close => app.overlay = None,
                    PickerAction::Accept(i) => {
                        if let Some(example) = app.tui.catalog.get(i) {
                            app.tui.editor.load_text(&example.code);
                        }
                        app.overlay = None;
                    }
                }
                return vec![];
            }

            let outcome = editor::update::handle_main_key(
                &mut app.tui.editor,
                &mut app.tui.output,
                key,
            );
            if outcome.open_picker {
                app.overlay = Some(Overlay::ExamplePicker(ExamplePickerState::default()));
            }
            outcome.effects
        }
        Event::Mouse(mouse) => {
            match mouse.kind {
                MouseEventKind::ScrollUp => app.tui.editor.scroll_by(-WHEEL_SCROLL_ROWS),
                MouseEventKind::ScrollDown => app.tui.editor.scroll_by(WHEEL_SCROLL_ROWS),
                _ => {}
            }
            vec![]
        }
        Event::Paste(text) => {
            if app.overlay.is_none() {
                // Terminals deliver CRLF line endings in bracketed paste.
                let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
                app.tui.editor.buffer.insert_str(&normalized);
                app.tui.editor.ensure_cursor_visible();
            }
            vec![]
        }
        // Resize is picked up by the next Frame event.
        _ => vec![],
    }
}
