//! Editor feature reducer.
//!
//! Key handling for the editor pane. Tab without Shift is intercepted and
//! becomes a four-space insertion; BackTab (Shift+Tab) is deliberately not
//! handled and falls through to the default arm, which ignores it. All
//! other keys behave as plain text-input editing.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers as CrosstermKeyModifiers};

use super::CursorMove;
use super::state::EditorState;
use crate::effects::UiEffect;
use crate::features::output::OutputState;

/// Result of handling one key press in the editor.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct KeyOutcome {
    /// Effects for the runtime.
    pub effects: Vec<UiEffect>,
    /// The reducer should open the example picker.
    pub open_picker: bool,
}

impl KeyOutcome {
    fn none() -> Self {
        Self::default()
    }

    fn effect(effect: UiEffect) -> Self {
        Self {
            effects: vec![effect],
            open_picker: false,
        }
    }
}

/// Parsed key modifiers for cleaner pattern matching.
struct Modifiers {
    ctrl: bool,
    shift: bool,
    alt: bool,
}

impl Modifiers {
    fn from(key: &KeyEvent) -> Self {
        Self {
            ctrl: key.modifiers.contains(CrosstermKeyModifiers::CONTROL),
            shift: key.modifiers.contains(CrosstermKeyModifiers::SHIFT),
            alt: key.modifiers.contains(CrosstermKeyModifiers::ALT),
        }
    }

    fn only_ctrl(&self) -> bool {
        self.ctrl && !self.shift && !self.alt
    }
}

/// Handles a key press when no overlay is active.
pub fn handle_main_key(
    editor: &mut EditorState,
    output: &mut OutputState,
    key: KeyEvent,
) -> KeyOutcome {
    if matches!(key.kind, KeyEventKind::Release) {
        return KeyOutcome::none();
    }

    let mods = Modifiers::from(&key);

    if let Some(outcome) = handle_control_keys(editor, output, key.code, &mods) {
        return outcome;
    }

    handle_editing(editor, key.code, &mods);
    editor.ensure_cursor_visible();
    KeyOutcome::none()
}

/// Control chords: run, picker, select-all, quit.
fn handle_control_keys(
    editor: &mut EditorState,
    output: &mut OutputState,
    code: KeyCode,
    mods: &Modifiers,
) -> Option<KeyOutcome> {
    match code {
        KeyCode::Char('c' | 'q') if mods.only_ctrl() => Some(KeyOutcome::effect(UiEffect::Quit)),
        // Run the current buffer. Waiting is set here, synchronously,
        // before the request is spawned.
        KeyCode::Char('r') if mods.only_ctrl() => Some(run_current(editor, output)),
        KeyCode::F(5) => Some(run_current(editor, output)),
        KeyCode::Char('o') if mods.only_ctrl() => Some(KeyOutcome {
            effects: vec![],
            open_picker: true,
        }),
        KeyCode::Char('a') if mods.only_ctrl() => {
            editor.buffer.select_all();
            Some(KeyOutcome::none())
        }
        _ => None,
    }
}

fn run_current(editor: &EditorState, output: &mut OutputState) -> KeyOutcome {
    let seq = output.begin_run();
    KeyOutcome::effect(UiEffect::SpawnRun {
        seq,
        source: editor.buffer.text().to_string(),
    })
}

/// Plain editing keys. Shift extends the selection on movement keys.
fn handle_editing(editor: &mut EditorState, code: KeyCode, mods: &Modifiers) {
    match code {
        // The indent interception: Tab without Shift inserts the fixed
        // four-space literal at the caret, replacing any selection.
        KeyCode::Tab if !mods.shift => editor.buffer.insert_indent(),
        KeyCode::Enter => editor.buffer.insert_newline(),
        KeyCode::Backspace => editor.buffer.delete_prev_char(),
        KeyCode::Delete => editor.buffer.delete_next_char(),
        KeyCode::Left => editor.buffer.move_cursor(CursorMove::Back, mods.shift),
        KeyCode::Right => editor.buffer.move_cursor(CursorMove::Forward, mods.shift),
        KeyCode::Up => editor.buffer.move_cursor(CursorMove::Up, mods.shift),
        KeyCode::Down => editor.buffer.move_cursor(CursorMove::Down, mods.shift),
        KeyCode::Home if mods.ctrl => editor.buffer.move_cursor(CursorMove::Top, mods.shift),
        KeyCode::End if mods.ctrl => editor.buffer.move_cursor(CursorMove::Bottom, mods.shift),
        KeyCode::Home => editor.buffer.move_cursor(CursorMove::Head, mods.shift),
        KeyCode::End => editor.buffer.move_cursor(CursorMove::End, mods.shift),
        KeyCode::PageUp => editor.scroll_by(-(editor.viewport_height.max(1) as isize)),
        KeyCode::PageDown => editor.scroll_by(editor.viewport_height.max(1) as isize),
        KeyCode::Char(ch) if !mods.ctrl && !mods.alt => editor.buffer.insert_char(ch),
        // BackTab and anything else: no default behavior to fall through to.
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use crate::features::output::RunState;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, CrosstermKeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, mods: CrosstermKeyModifiers) -> KeyEvent {
        KeyEvent::new(code, mods)
    }

    #[test]
    fn tab_inserts_indent_instead_of_moving_focus() {
        let mut editor = EditorState::with_text("a\nb\nc");
        let mut output = OutputState::default();

        let outcome = handle_main_key(&mut editor, &mut output, key(KeyCode::Tab));
        assert_eq!(outcome, KeyOutcome::none());
        assert_eq!(editor.buffer.text(), "    a\nb\nc");
        assert_eq!(editor.buffer.selection(), (4, 4));
    }

    #[test]
    fn backtab_is_not_intercepted() {
        let mut editor = EditorState::with_text("abc");
        let mut output = OutputState::default();

        handle_main_key(
            &mut editor,
            &mut output,
            key_with(KeyCode::BackTab, CrosstermKeyModifiers::SHIFT),
        );
        assert_eq!(editor.buffer.text(), "abc");
    }

    #[test]
    fn ctrl_r_begins_run_with_current_buffer() {
        let mut editor = EditorState::with_text("print 1;");
        let mut output = OutputState::default();

        let outcome =
            handle_main_key(&mut editor, &mut output, key_with(KeyCode::Char('r'), CrosstermKeyModifiers::CONTROL));

        // Waiting is observable before the network call resolves.
        assert_eq!(*output.run(), RunState::Waiting);
        assert_eq!(outcome.effects.len(), 1);
        match &outcome.effects[0] {
            UiEffect::SpawnRun { source, .. } => assert_eq!(source, "print 1;"),
            other => panic!("unexpected effect: {other:?}"),
        }
    }

    #[test]
    fn ctrl_o_requests_the_picker() {
        let mut editor = EditorState::with_text("");
        let mut output = OutputState::default();

        let outcome =
            handle_main_key(&mut editor, &mut output, key_with(KeyCode::Char('o'), CrosstermKeyModifiers::CONTROL));
        assert!(outcome.open_picker);
    }

    #[test]
    fn shift_arrows_build_a_selection_tab_replaces_it() {
        let mut editor = EditorState::with_text("hello");
        let mut output = OutputState::default();

        for _ in 0..2 {
            handle_main_key(
                &mut editor,
                &mut output,
                key_with(KeyCode::Right, CrosstermKeyModifiers::SHIFT),
            );
        }
        assert_eq!(editor.buffer.selection(), (0, 2));

        handle_main_key(&mut editor, &mut output, key(KeyCode::Tab));
        assert_eq!(editor.buffer.text(), "    llo");
        assert_eq!(editor.buffer.selection(), (4, 4));
    }

    #[test]
    fn typing_goes_to_the_buffer() {
        let mut editor = EditorState::with_text("");
        let mut output = OutputState::default();

        for ch in "print 1;".chars() {
            handle_main_key(&mut editor, &mut output, key(KeyCode::Char(ch)));
        }
        handle_main_key(&mut editor, &mut output, key(KeyCode::Enter));
        assert_eq!(editor.buffer.text(), "print 1;\n");
    }
}
