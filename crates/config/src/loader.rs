//! Environment-based configuration loading.
//!
//! Responsibilities:
//! - Read configuration from environment variables (with `.env` support).
//! - Allow explicit overrides (e.g. from CLI flags) before building.
//! - Validate the final configuration (URL shape, positive durations).
//!
//! Does NOT handle:
//! - Secret storage beyond process memory (no keyring, no encryption).
//! - Writing configuration back to disk.
//!
//! Invariants:
//! - Explicit overrides take precedence over environment variables.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - `build()` rejects zero poll timeouts/intervals; the polling loop in the
//!   client assumes both are positive.

use secrecy::SecretString;
use std::time::Duration;
use thiserror::Error;
use url::Url;

use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_PACS_NAME, DEFAULT_POLL_INTERVAL_SECS,
    DEFAULT_POLL_TIMEOUT_SECS,
};
use crate::types::{Config, ConnectionConfig, PfdcmConfig, PollConfig};

/// Errors that can occur while loading configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required value is missing from both overrides and the environment.
    #[error("Missing configuration value: {var}")]
    MissingValue { var: String },

    /// A value is present but malformed.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// `.env` file exists but could not be read.
    #[error("Failed to load .env file: {0}")]
    Dotenv(#[from] dotenvy::Error),
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn env_secs(key: &str) -> Result<Option<Duration>, ConfigError> {
    match env_var_or_none(key) {
        None => Ok(None),
        Some(raw) => {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: key.to_string(),
                message: "must be a number of seconds".to_string(),
            })?;
            Ok(Some(Duration::from_secs(secs)))
        }
    }
}

/// Builder that assembles a [`Config`] from the environment plus overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    username: Option<String>,
    password: Option<SecretString>,
    http_timeout: Option<Duration>,
    poll_timeout: Option<Duration>,
    poll_interval: Option<Duration>,
    pfdcm_url: Option<String>,
    pacs_name: Option<String>,
}

impl ConfigLoader {
    /// Create a loader with no overrides set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a `.env` file from the current directory if one exists.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load_dotenv(&self) -> Result<(), ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!("Loaded environment from {}", path.display());
                Ok(())
            }
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::Dotenv(e)),
        }
    }

    pub fn base_url(mut self, url: Option<String>) -> Self {
        self.base_url = url;
        self
    }

    pub fn username(mut self, username: Option<String>) -> Self {
        self.username = username;
        self
    }

    pub fn password(mut self, password: Option<SecretString>) -> Self {
        self.password = password;
        self
    }

    pub fn http_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn poll_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.poll_timeout = timeout;
        self
    }

    pub fn poll_interval(mut self, interval: Option<Duration>) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn pfdcm_url(mut self, url: Option<String>) -> Self {
        self.pfdcm_url = url;
        self
    }

    pub fn pacs_name(mut self, name: Option<String>) -> Self {
        self.pacs_name = name;
        self
    }

    /// Build the final configuration, falling back to environment variables
    /// for anything not explicitly overridden.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = self
            .base_url
            .or_else(|| env_var_or_none("CUBE_URL"))
            .ok_or_else(|| ConfigError::MissingValue {
                var: "CUBE_URL".to_string(),
            })?;
        let base_url = validate_url("CUBE_URL", base_url)?;

        let username = self
            .username
            .or_else(|| env_var_or_none("CUBE_USERNAME"))
            .ok_or_else(|| ConfigError::MissingValue {
                var: "CUBE_USERNAME".to_string(),
            })?;

        let password = match self.password {
            Some(p) => p,
            None => env_var_or_none("CUBE_PASSWORD")
                .map(|p| SecretString::new(p.into()))
                .ok_or_else(|| ConfigError::MissingValue {
                    var: "CUBE_PASSWORD".to_string(),
                })?,
        };

        let http_timeout = match self.http_timeout {
            Some(t) => t,
            None => env_secs("CUBE_TIMEOUT")?
                .unwrap_or(Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)),
        };

        let poll_timeout = match self.poll_timeout {
            Some(t) => t,
            None => env_secs("CUBE_POLL_TIMEOUT")?
                .unwrap_or(Duration::from_secs(DEFAULT_POLL_TIMEOUT_SECS)),
        };
        let poll_interval = match self.poll_interval {
            Some(t) => t,
            None => env_secs("CUBE_POLL_INTERVAL")?
                .unwrap_or(Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS)),
        };
        validate_positive("CUBE_POLL_TIMEOUT", poll_timeout)?;
        validate_positive("CUBE_POLL_INTERVAL", poll_interval)?;

        let pfdcm = match self.pfdcm_url.or_else(|| env_var_or_none("PFDCM_URL")) {
            Some(url) => {
                let url = validate_url("PFDCM_URL", url)?;
                Some(PfdcmConfig {
                    url,
                    pacs_name: self
                        .pacs_name
                        .or_else(|| env_var_or_none("PFDCM_PACS_NAME"))
                        .unwrap_or_else(|| DEFAULT_PACS_NAME.to_string()),
                })
            }
            None => None,
        };

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                username,
                password,
                timeout: http_timeout,
            },
            poll: PollConfig {
                timeout: poll_timeout,
                interval: poll_interval,
            },
            pfdcm,
        })
    }
}

fn validate_url(var: &str, raw: String) -> Result<String, ConfigError> {
    Url::parse(&raw).map_err(|e| ConfigError::InvalidValue {
        var: var.to_string(),
        message: e.to_string(),
    })?;
    Ok(raw)
}

fn validate_positive(var: &str, value: Duration) -> Result<(), ConfigError> {
    if value.is_zero() {
        return Err(ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be positive".to_string(),
        });
    }
    Ok(())
}
