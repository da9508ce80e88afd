//! Full-screen TUI playground for the Aspen language.

pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
use aspen_play_core::config::Config;
use aspen_play_core::examples::catalog_with_extras;
use aspen_play_core::runner::Runner;
pub use runtime::TuiRuntime;

use crate::state::AppState;

/// Runs the interactive playground.
///
/// # Errors
/// Fails when stderr is not a terminal, the endpoint is malformed, or the
/// terminal cannot be set up.
pub async fn run_playground(config: &Config) -> Result<()> {
    // The playground requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "The playground requires a terminal.\n\
             Use `aspen-play run <file>` for non-interactive execution."
        );
    }

    let endpoint = config.resolve_endpoint()?;
    let catalog = catalog_with_extras(&config.examples);
    let runner = Runner::new(endpoint.clone())?;

    tracing::info!(%endpoint, examples = catalog.len(), "starting playground");

    let state = AppState::new(catalog, endpoint);
    let mut runtime = TuiRuntime::new(state, runner)?;
    runtime.run()?;

    Ok(())
}
