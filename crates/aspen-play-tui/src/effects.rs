//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never performs I/O or spawns tasks itself; it records the
//! state transition (e.g. `Waiting`) and hands the side effect back.

use crate::features::output::RunSeq;

/// Effects returned by the reducer for the runtime to execute.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Submit `source` to the execution server. The completion event must
    /// carry `seq` so stale responses can be discarded.
    SpawnRun { seq: RunSeq, source: String },
}
