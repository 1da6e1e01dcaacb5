//! High-level clients for CUBE and pfdcm.
//!
//! # Submodules
//! - [`builder`]: CUBE client construction and configuration
//! - `pfdcm`: the pfdcm intermediary client
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Decoding and matching (see [`crate::decode`], [`crate::matcher`])

pub mod builder;
mod pfdcm;

pub use pfdcm::PfdcmClient;

use pacs_config::PollConfig;

use crate::auth::Credentials;
use crate::directive::SearchDirective;
use crate::endpoints;
use crate::error::Result;
use crate::models::{QueryId, SubmitOutcome};

/// Client for the CUBE PACS query API.
///
/// Holds the HTTP client, the queries collection base URL, basic-auth
/// credentials, and the polling parameters. Construct one with
/// [`CubeClient::builder()`] or [`CubeClient::from_config`].
#[derive(Debug)]
pub struct CubeClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) poll: PollConfig,
}

impl CubeClient {
    /// Create a new client builder.
    pub fn builder() -> builder::CubeClientBuilder {
        builder::CubeClientBuilder::new()
    }

    /// Build a client straight from loaded configuration.
    pub fn from_config(config: &pacs_config::Config) -> Result<Self> {
        builder::CubeClientBuilder::from_config(config).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Register a query under `title`, or reuse the existing one with that
    /// title. See [`endpoints::queries::create_or_reuse_query`].
    pub async fn create_or_reuse_query(
        &self,
        title: &str,
        query: &SearchDirective,
    ) -> Result<SubmitOutcome> {
        endpoints::create_or_reuse_query(
            &self.http,
            &self.base_url,
            &self.credentials,
            title,
            query,
        )
        .await
    }

    /// Poll a query to completion and return its encoded result payload,
    /// using the configured poll timeout and interval.
    pub async fn wait_for_result(&self, id: &QueryId) -> Result<String> {
        endpoints::wait_for_result(
            &self.http,
            &self.base_url,
            &self.credentials,
            id,
            self.poll.timeout,
            self.poll.interval,
        )
        .await
    }
}
