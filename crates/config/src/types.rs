//! Configuration types for the PACS query tools.
//!
//! Responsibilities:
//! - Define connection settings for CUBE (URL, basic-auth credentials).
//! - Define polling settings (timeout, interval) with serde support.
//! - Define the optional pfdcm intermediary settings.
//!
//! Does NOT handle:
//! - Loading from environment/.env (see `loader` module).
//! - Actual network connections (see the client crate).
//!
//! Invariants:
//! - All duration fields are serialized as seconds (integers).
//! - Secrets use `secrecy::SecretString` to prevent accidental logging.

use crate::constants::{
    DEFAULT_HTTP_TIMEOUT_SECS, DEFAULT_PACS_NAME, DEFAULT_POLL_INTERVAL_SECS,
    DEFAULT_POLL_TIMEOUT_SECS,
};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Module for serializing SecretString as plain strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Connection configuration for the CUBE PACS query API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the queries collection,
    /// e.g. `https://cube.example.org/api/v1/pacs/1`.
    pub base_url: String,
    /// Username for HTTP basic auth.
    pub username: String,
    /// Password for HTTP basic auth.
    #[serde(with = "secret_string")]
    pub password: SecretString,
    /// Per-request HTTP timeout (serialized as seconds).
    #[serde(with = "duration_seconds", default = "default_http_timeout")]
    pub timeout: Duration,
}

fn default_http_timeout() -> Duration {
    Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS)
}

/// Polling configuration for awaiting query completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Total wall-clock budget before giving up (serialized as seconds).
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
    /// Delay between two status checks (serialized as seconds).
    #[serde(with = "duration_seconds")]
    pub interval: Duration,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_POLL_TIMEOUT_SECS),
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
        }
    }
}

/// Configuration for the pfdcm intermediary service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PfdcmConfig {
    /// Base URL of pfdcm, with trailing slash, e.g. `http://pfdcm:4005/api/v1/`.
    pub url: String,
    /// Name of the PACS service registered with pfdcm.
    #[serde(default = "default_pacs_name")]
    pub pacs_name: String,
}

fn default_pacs_name() -> String {
    DEFAULT_PACS_NAME.to_string()
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// CUBE connection settings.
    pub connection: ConnectionConfig,
    /// Polling settings.
    #[serde(default)]
    pub poll: PollConfig,
    /// pfdcm settings, present only when the intermediary path is used.
    #[serde(default)]
    pub pfdcm: Option<PfdcmConfig>,
}
