//! Client for the pfdcm intermediary service.
//!
//! pfdcm brokers directives to the PACS synchronously and needs no
//! authentication, so this client is a thin pairing of an HTTP client with a
//! base URL and a PACS service name.

use pacs_config::PfdcmConfig;
use serde_json::Value;

use crate::directive::SearchDirective;
use crate::endpoints;
use crate::error::Result;
use crate::models::StudyGroup;

/// Client for pfdcm's REST API.
#[derive(Debug, Clone)]
pub struct PfdcmClient {
    http: reqwest::Client,
    base_url: String,
    pacs_name: String,
}

impl PfdcmClient {
    /// Create a client for the given pfdcm base URL and PACS service name.
    ///
    /// The base URL is normalized to end with a single slash; endpoint code
    /// appends relative paths like `about/`.
    pub fn new(base_url: impl Into<String>, pacs_name: impl Into<String>) -> Self {
        let mut base_url = base_url.into().trim_end_matches('/').to_string();
        base_url.push('/');
        Self {
            http: reqwest::Client::new(),
            base_url,
            pacs_name: pacs_name.into(),
        }
    }

    pub fn from_config(config: &PfdcmConfig) -> Self {
        Self::new(config.url.clone(), config.pacs_name.clone())
    }

    /// Probe the `about/` endpoint, returning pfdcm's info document.
    pub async fn about(&self) -> Result<Value> {
        endpoints::about(&self.http, &self.base_url).await
    }

    /// Run a synchronous pypx status directive, returning the study groups.
    pub async fn pacs_status(&self, directive: &SearchDirective) -> Result<Vec<StudyGroup>> {
        endpoints::pacs_status(&self.http, &self.base_url, &self.pacs_name, directive).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_gets_exactly_one_trailing_slash() {
        let client = PfdcmClient::new("http://pfdcm:4005/api/v1", "PACSDCM");
        assert_eq!(client.base_url, "http://pfdcm:4005/api/v1/");

        let client = PfdcmClient::new("http://pfdcm:4005/api/v1///", "PACSDCM");
        assert_eq!(client.base_url, "http://pfdcm:4005/api/v1/");
    }
}
