//! Non-interactive execution: POST a source file and print the output.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use aspen_play_core::config::Config;
use aspen_play_core::runner::{FAILURE_MESSAGE, Runner};

/// Reads the program, submits it, and prints the server's output verbatim.
///
/// The exit code mirrors the transport outcome only: an interpreter error
/// printed by the server is still a successful run.
pub async fn run(file: &str, endpoint_override: Option<&str>, config: &Config) -> Result<()> {
    let source = read_source(file)?;

    let endpoint = match endpoint_override {
        Some(raw) => {
            let trimmed = raw.trim();
            url::Url::parse(trimmed)
                .with_context(|| format!("Invalid execution endpoint URL: {trimmed}"))?;
            trimmed.to_string()
        }
        None => config.resolve_endpoint()?,
    };

    let runner = Runner::new(endpoint)?;
    match runner.execute(&source).await {
        Ok(output) => {
            // No trailing newline is added; the body is the whole story.
            print!("{output}");
            Ok(())
        }
        Err(err) => {
            tracing::warn!(error = format!("{err:#}"), "run request failed");
            anyhow::bail!("{FAILURE_MESSAGE}")
        }
    }
}

fn read_source(file: &str) -> Result<String> {
    if file == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read program from stdin")?;
        return Ok(source);
    }
    let path = Path::new(file);
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read program from {}", path.display()))
}
