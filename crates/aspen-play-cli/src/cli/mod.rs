//! CLI entry and dispatch.

use anyhow::{Context, Result};
use aspen_play_core::config::Config;
use clap::Parser;

use crate::{logging, modes};

mod commands;

#[derive(Parser)]
#[command(name = "aspen-play")]
#[command(version)]
#[command(about = "Interactive playground for the Aspen language")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Execute a program against the remote server and print its output
    Run {
        /// Path to the Aspen source file, or `-` for stdin
        #[arg(value_name = "FILE")]
        file: String,

        /// Override the execution endpoint URL
        #[arg(long, env = "ASPEN_PLAY_ENDPOINT", value_name = "URL")]
        endpoint: Option<String>,
    },

    /// List the names of the example programs
    Examples,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // one tokio runtime for everything
    let rt = tokio::runtime::Runtime::new().context("create tokio runtime")?;

    rt.block_on(async move { dispatch(cli).await })
}

async fn dispatch(cli: Cli) -> Result<()> {
    // The guard flushes buffered log lines on drop.
    let _log_guard = logging::init()?;

    let config = Config::load().context("load config")?;

    // default to the interactive playground
    let Some(command) = cli.command else {
        return modes::run_playground(&config).await;
    };

    match command {
        Commands::Run { file, endpoint } => {
            commands::run::run(&file, endpoint.as_deref(), &config).await
        }
        Commands::Examples => commands::examples::list(&config),
    }
}
