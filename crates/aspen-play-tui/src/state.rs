//! Application state composition.
//!
//! Top-level state hierarchy for the playground TUI:
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── editor: EditorState  (buffer, caret, scroll)
//! │   ├── output: OutputState  (run lifecycle, issue counter)
//! │   ├── catalog: Vec<ExampleEntry>
//! │   └── endpoint: String     (display only; the runtime owns the client)
//! └── overlay: Option<Overlay> (modal example picker)
//! ```
//!
//! State is split between `TuiState` and `Option<Overlay>` so overlay
//! handlers can take `&mut` to both without borrow conflicts.

use aspen_play_core::examples::ExampleEntry;

use crate::features::editor::EditorState;
use crate::features::output::OutputState;
use crate::overlays::Overlay;

/// Combined application state for the TUI.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    /// Creates the playground state. The buffer is pre-seeded with the
    /// first catalog entry so the editor never opens empty.
    pub fn new(catalog: Vec<ExampleEntry>, endpoint: String) -> Self {
        let seed = catalog.first().map(|e| e.code.as_str()).unwrap_or("");
        Self {
            tui: TuiState {
                should_quit: false,
                editor: EditorState::with_text(seed),
                output: OutputState::default(),
                catalog,
                endpoint,
            },
            overlay: None,
        }
    }
}

/// Non-overlay TUI state.
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Editor pane state.
    pub editor: EditorState,
    /// Output pane / run lifecycle state.
    pub output: OutputState,
    /// The ordered example catalog (built-ins plus config extras).
    pub catalog: Vec<ExampleEntry>,
    /// Effective execution endpoint, shown in the status line.
    pub endpoint: String,
}
