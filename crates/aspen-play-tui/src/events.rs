//! UI event types.
//!
//! Everything that can change state arrives here as a `UiEvent` and goes
//! through the reducer, one event at a time. That serialization is what
//! makes the reducer the single owner of buffer and run-state mutations.

use crate::features::output::RunSeq;

/// Events processed by the reducer.
#[derive(Debug)]
pub enum UiEvent {
    /// Periodic tick; drives rendering cadence.
    Tick,
    /// Frame boundary with the current terminal size.
    Frame { width: u16, height: u16 },
    /// Raw terminal input (keys, mouse, paste, resize).
    Terminal(crossterm::event::Event),
    /// A spawned run resolved. `result` is `Ok(output)` on transport success
    /// (the body may itself be an interpreter error, rendered verbatim) or
    /// `Err(message)` with the fixed failure text.
    RunFinished {
        seq: RunSeq,
        result: Result<String, String>,
    },
}
