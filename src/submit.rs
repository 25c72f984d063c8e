//! Snapshot submission client.
//!
//! Posts the aggregated snapshot to the dependency-graph ingestion endpoint.
//! This is the only blocking network operation in the crate and lives
//! entirely outside the conversion core.

use crate::error::{Result, SnapshotError, SubmitErrorKind};
use crate::model::Snapshot;
use reqwest::blocking::Client;
use std::time::Duration;

/// Submission client configuration.
#[derive(Debug, Clone)]
pub struct SnapshotClientConfig {
    /// Ingestion endpoint URL
    pub api_url: String,
    /// Bearer token
    pub token: String,
    /// Request timeout
    pub timeout: Duration,
    /// Maximum retries for failed requests
    pub max_retries: u8,
}

impl SnapshotClientConfig {
    /// Create a config with default timeout and retry policy.
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            token: token.into(),
            timeout: Duration::from_secs(30),
            max_retries: 3,
        }
    }
}

/// HTTP client for snapshot submission.
pub struct SnapshotClient {
    client: Client,
    config: SnapshotClientConfig,
}

/// Helper to convert reqwest errors to submission errors
fn network_error(msg: &str, err: reqwest::Error) -> SnapshotError {
    SnapshotError::submit(msg, SubmitErrorKind::NetworkError(err.to_string()))
}

impl SnapshotClient {
    /// Create a new submission client.
    pub fn new(config: SnapshotClientConfig) -> Result<Self> {
        if config.token.is_empty() {
            return Err(SnapshotError::submit(
                "creating client",
                SubmitErrorKind::MissingCredentials("empty bearer token".to_string()),
            ));
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| network_error("Failed to create HTTP client", e))?;

        Ok(Self { client, config })
    }

    /// Submit a snapshot, retrying transient failures with backoff.
    pub fn submit(&self, snapshot: &Snapshot) -> Result<()> {
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(1 << (attempt - 1));
                std::thread::sleep(delay);
                tracing::debug!("Retry attempt {} after {:?}", attempt, delay);
            }

            match self.send_snapshot(snapshot) {
                Ok(()) => return Ok(()),
                Err(e) => {
                    tracing::debug!("Submission attempt {} failed: {}", attempt + 1, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            SnapshotError::submit(
                "submitting snapshot",
                SubmitErrorKind::NetworkError("unknown error".to_string()),
            )
        }))
    }

    /// Send a single submission request.
    fn send_snapshot(&self, snapshot: &Snapshot) -> Result<()> {
        let response = self
            .client
            .post(&self.config.api_url)
            .bearer_auth(&self.config.token)
            .json(snapshot)
            .send()
            .map_err(|e| network_error("Failed to send snapshot", e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(SnapshotError::submit(
                "submitting snapshot",
                SubmitErrorKind::ApiError {
                    status: status.as_u16(),
                    body,
                },
            ));
        }

        tracing::info!(
            manifests = snapshot.manifest_count(),
            status = status.as_u16(),
            "snapshot accepted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_token_rejected() {
        let config = SnapshotClientConfig::new("https://example.com/snapshots", "");
        let result = SnapshotClient::new(config);
        assert!(matches!(
            result,
            Err(SnapshotError::Submit {
                source: SubmitErrorKind::MissingCredentials(_),
                ..
            })
        ));
    }

    #[test]
    fn test_config_defaults() {
        let config = SnapshotClientConfig::new("https://example.com", "token");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_retries, 3);
    }
}
