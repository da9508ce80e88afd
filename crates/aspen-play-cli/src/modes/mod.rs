//! Runtime execution modes.
//!
//! - `run`: Non-interactive execution (stdout/stderr)
//! - `tui`: Full-screen interactive playground (optional feature)

#[cfg(feature = "tui")]
pub use aspen_play_tui::run_playground;

#[cfg(not(feature = "tui"))]
pub async fn run_playground(_config: &aspen_play_core::config::Config) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
