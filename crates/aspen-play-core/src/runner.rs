//! Remote execution client.
//!
//! The wire contract is a single POST with the raw program text as the whole
//! body and a plain-text response rendered verbatim. Program-level failures
//! are baked into the response body by the server; only transport-level
//! failures (unreachable host, non-2xx status) are errors here.
//!
//! No timeout is applied to the request: a hung server leaves the caller
//! waiting until the connection resolves or the process exits.

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;

/// Placeholder shown while a run is in flight.
pub const WAITING_MESSAGE: &str = "Waiting for remote server...";

/// Fixed user-visible message for any transport failure.
pub const FAILURE_MESSAGE: &str = "Internal server error.";

/// Standard User-Agent header for playground requests.
pub const USER_AGENT: &str = concat!("aspen-play/", env!("CARGO_PKG_VERSION"));

/// Remote execution client. Cheap to clone; wraps a shared reqwest client.
#[derive(Debug, Clone)]
pub struct Runner {
    client: reqwest::Client,
    endpoint: String,
}

impl Runner {
    /// Creates a runner for the given endpoint.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    /// Returns the endpoint this runner posts to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submits a program and returns the server's output verbatim.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx status. The error
    /// carries diagnostics for the log; user-facing code shows
    /// [`FAILURE_MESSAGE`] instead.
    pub async fn execute(&self, source: &str) -> Result<String> {
        tracing::debug!(endpoint = %self.endpoint, bytes = source.len(), "submitting program");

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(source.to_string())
            .send()
            .await
            .context("Failed to reach execution server")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Execution server returned HTTP {status}: {body}");
        }

        let output = response
            .text()
            .await
            .context("Failed to read execution response body")?;
        tracing::debug!(bytes = output.len(), "received program output");
        Ok(output)
    }
}
