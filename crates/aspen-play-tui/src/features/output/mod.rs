//! Run lifecycle state for the output pane.
//!
//! One run is live per playground instance. Each `run` gets a fresh
//! monotonically increasing sequence number; the reducer applies only the
//! completion belonging to the most recently issued run, so a superseded
//! request that resolves late can never overwrite fresher state.

pub mod render;

use aspen_play_core::runner::WAITING_MESSAGE;

/// Identifier of one issued run, ordered by issue time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RunSeq(pub u64);

/// The playground's view of the remote execution request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunState {
    /// Nothing has been run yet.
    Idle,
    /// A request is in flight.
    Waiting,
    /// Transport-level success; the body (which may contain an interpreter
    /// error printed by the server) is rendered verbatim.
    Succeeded { output: String },
    /// Transport-level failure, fixed generic message.
    Failed { message: String },
}

/// Output pane state: the current `RunState` plus the issue counter.
#[derive(Debug, Default)]
pub struct OutputState {
    run: RunState,
    issued: u64,
}

impl Default for RunState {
    fn default() -> Self {
        RunState::Idle
    }
}

impl OutputState {
    /// Returns the current run state.
    pub fn run(&self) -> &RunState {
        &self.run
    }

    /// Returns true if a run is in flight.
    pub fn is_waiting(&self) -> bool {
        matches!(self.run, RunState::Waiting)
    }

    /// Starts a new run: transitions to `Waiting` immediately (before any
    /// network activity) and returns the sequence number the completion
    /// event must carry. Re-entrant from any state.
    pub fn begin_run(&mut self) -> RunSeq {
        self.issued += 1;
        self.run = RunState::Waiting;
        RunSeq(self.issued)
    }

    /// Applies a completed run if and only if it is the most recently
    /// issued one. Returns false for a discarded stale completion.
    pub fn finish(&mut self, seq: RunSeq, result: Result<String, String>) -> bool {
        if seq.0 != self.issued {
            return false;
        }
        self.run = match result {
            Ok(output) => RunState::Succeeded { output },
            Err(message) => RunState::Failed { message },
        };
        true
    }

    /// Text shown in the output pane, whitespace preserved.
    pub fn display_text(&self) -> &str {
        match &self.run {
            RunState::Idle => "",
            RunState::Waiting => WAITING_MESSAGE,
            RunState::Succeeded { output } => output,
            RunState::Failed { message } => message,
        }
    }
}

#[cfg(test)]
mod tests {
    use aspen_play_core::runner::FAILURE_MESSAGE;

    use super::*;

    #[test]
    fn begin_run_transitions_to_waiting_synchronously() {
        let mut output = OutputState::default();
        assert_eq!(*output.run(), RunState::Idle);
        let _seq = output.begin_run();
        assert_eq!(*output.run(), RunState::Waiting);
        assert_eq!(output.display_text(), WAITING_MESSAGE);
    }

    #[test]
    fn success_and_failure_resolve_waiting() {
        let mut output = OutputState::default();
        let seq = output.begin_run();
        assert!(output.finish(seq, Ok("42\n".to_string())));
        assert_eq!(output.display_text(), "42\n");

        let seq = output.begin_run();
        assert!(output.finish(seq, Err(FAILURE_MESSAGE.to_string())));
        assert_eq!(output.display_text(), FAILURE_MESSAGE);
    }

    #[test]
    fn rerun_from_terminal_states_restarts_cycle() {
        let mut output = OutputState::default();
        let seq = output.begin_run();
        output.finish(seq, Err(FAILURE_MESSAGE.to_string()));
        output.begin_run();
        assert!(output.is_waiting());
    }

    #[test]
    fn newest_issued_run_wins_even_if_it_resolves_first() {
        let mut output = OutputState::default();
        let first = output.begin_run();
        let second = output.begin_run();

        // The second run's response arrives first and lands.
        assert!(output.finish(second, Ok("second\n".to_string())));
        assert_eq!(output.display_text(), "second\n");

        // The superseded run's late response is discarded.
        assert!(!output.finish(first, Ok("first\n".to_string())));
        assert_eq!(output.display_text(), "second\n");
    }

    #[test]
    fn stale_failure_cannot_clobber_fresh_waiting() {
        let mut output = OutputState::default();
        let first = output.begin_run();
        let _second = output.begin_run();
        assert!(!output.finish(first, Err(FAILURE_MESSAGE.to_string())));
        assert!(output.is_waiting());
    }
}
