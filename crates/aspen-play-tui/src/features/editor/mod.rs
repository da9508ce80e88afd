//! Editor feature slice: buffer, viewport state, key handling, view.

pub mod buffer;
pub mod render;
pub mod state;
pub mod update;

pub use buffer::{CursorMove, EditBuffer, INDENT, count_lines};
pub use state::EditorState;
