//! Client builder for constructing [`CubeClient`] instances.
//!
//! # What this module handles:
//! - A fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (per-request timeout)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`CubeClient`] methods in `mod.rs`)
//! - Loading configuration from the environment (see the `pacs-config` crate)
//!
//! # Invariants
//! - `base_url` and credentials are required and must be provided before
//!   calling `build()`.
//! - The base URL is always normalized to have no trailing slash; endpoint
//!   code appends `/queries/...` itself.

use secrecy::SecretString;
use std::time::Duration;

use pacs_config::{Config, PollConfig, constants::DEFAULT_HTTP_TIMEOUT_SECS};

use crate::auth::Credentials;
use crate::client::CubeClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`CubeClient`].
pub struct CubeClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    timeout: Duration,
    poll: PollConfig,
}

impl Default for CubeClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            poll: PollConfig::default(),
        }
    }
}

impl CubeClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a builder from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .base_url(config.connection.base_url.clone())
            .credentials(
                config.connection.username.clone(),
                config.connection.password.clone(),
            )
            .timeout(config.connection.timeout)
            .poll(config.poll.clone())
    }

    /// Set the base URL of the queries collection, e.g.
    /// `https://cube.example.org/api/v1/pacs/1`. Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the basic-auth credentials.
    pub fn credentials(mut self, username: impl Into<String>, password: SecretString) -> Self {
        self.credentials = Some(Credentials::new(username, password));
        self
    }

    /// Set the per-request HTTP timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the polling parameters. Defaults are 60s timeout, 3s interval.
    pub fn poll(mut self, poll: PollConfig) -> Self {
        self.poll = poll;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<CubeClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Config("base_url is required".to_string()))?
            .trim_end_matches('/')
            .to_string();
        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::Config("credentials are required".to_string()))?;

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ClientError::Http)?;

        Ok(CubeClient {
            http,
            base_url,
            credentials,
            poll: self.poll,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_is_normalized() {
        let client = CubeClient::builder()
            .base_url("https://cube.example.org/api/v1/pacs/1///".to_string())
            .credentials("chris", SecretString::new("chris1234".to_string().into()))
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://cube.example.org/api/v1/pacs/1");
    }

    #[test]
    fn test_missing_base_url_is_an_error() {
        let result = CubeClient::builder()
            .credentials("chris", SecretString::new("chris1234".to_string().into()))
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_credentials_is_an_error() {
        let result = CubeClient::builder()
            .base_url("https://cube.example.org/api/v1/pacs/1".to_string())
            .build();
        assert!(result.is_err());
    }
}
