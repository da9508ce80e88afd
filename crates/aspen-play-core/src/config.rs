//! Configuration management for the Aspen playground.
//!
//! Loads configuration from ${ASPEN_PLAY_HOME}/config.toml with sensible
//! defaults. The execution endpoint is injected configuration, never a
//! compiled-in global, so tests can point the playground at a fake server.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::examples::ExampleEntry;

/// Environment variable overriding the execution endpoint.
pub const ENDPOINT_ENV_VAR: &str = "ASPEN_PLAY_ENDPOINT";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Remote execution endpoint (full URL of the /run handler).
    pub endpoint: String,

    /// Extra example programs appended after the built-in catalog.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ExampleEntry>,
}

impl Config {
    /// The public Aspen playground server.
    pub const DEFAULT_ENDPOINT: &str = "https://api.aspen.junlim.dev/run";

    /// Loads configuration from the default config path.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the effective endpoint with precedence: env > config.
    ///
    /// # Errors
    /// Returns an error if the resolved value is not a valid URL.
    pub fn resolve_endpoint(&self) -> Result<String> {
        resolve_endpoint(&self.endpoint, ENDPOINT_ENV_VAR)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: Self::DEFAULT_ENDPOINT.to_string(),
            examples: Vec::new(),
        }
    }
}

/// Resolves an endpoint URL with precedence: env > config value.
///
/// # Errors
/// Returns an error if the winning value is not a well-formed URL.
pub fn resolve_endpoint(config_endpoint: &str, env_var: &str) -> Result<String> {
    if let Ok(env_url) = std::env::var(env_var) {
        let trimmed = env_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed)?;
            return Ok(trimmed.to_string());
        }
    }

    let trimmed = config_endpoint.trim();
    if trimmed.is_empty() {
        return Ok(Config::DEFAULT_ENDPOINT.to_string());
    }
    validate_url(trimmed)?;
    Ok(trimmed.to_string())
}

/// Validates that a URL is well-formed.
fn validate_url(url: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid execution endpoint URL: {url}"))?;
    Ok(())
}

pub mod paths {
    //! Path resolution for playground configuration and data directories.
    //!
    //! ASPEN_PLAY_HOME resolution order:
    //! 1. ASPEN_PLAY_HOME environment variable (if set)
    //! 2. ~/.config/aspen-play (default)

    use std::path::PathBuf;

    /// Returns the playground home directory.
    ///
    /// Checks ASPEN_PLAY_HOME env var first, falls back to ~/.config/aspen-play
    pub fn play_home() -> PathBuf {
        if let Ok(home) = std::env::var("ASPEN_PLAY_HOME") {
            return PathBuf::from(home);
        }

        home_dir()
            .map(|h| h.join(".config").join("aspen-play"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        play_home().join("config.toml")
    }

    /// Returns the directory for log files.
    pub fn logs_dir() -> PathBuf {
        play_home().join("logs")
    }

    /// Returns the user's home directory from $HOME.
    pub fn home_dir() -> Option<PathBuf> {
        std::env::var_os("HOME").map(PathBuf::from)
    }
}
