//! Error types for the CUBE client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during PACS query operations.
///
/// Every variant is fatal to the current run; only the polling loop itself
/// repeats status checks, and it never retries submission.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection refused, DNS failure, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Connection to a named service could not be established.
    #[error("Connection to {service} could not be established: {source}")]
    Connection {
        service: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// Query registration was rejected for a reason other than a duplicate title.
    #[error("Query submission rejected ({status}): {message}")]
    Submission { status: u16, message: String },

    /// The registry claimed the title exists but the listing does not show it.
    #[error("Query titled '{title}' is registered but absent from the listing")]
    LookupFailed { title: String },

    /// A successful registration response carried no `id` field.
    #[error("No query ID found in the registration response")]
    MissingId,

    /// Polling exceeded the configured timeout without reaching `succeeded`.
    #[error("Timed out after {timeout:?} waiting for query to succeed (last status: {last_status})")]
    PollTimeout {
        timeout: Duration,
        last_status: String,
    },

    /// The query reported `succeeded` but carried no result payload.
    #[error("Query succeeded but carried no result payload")]
    IncompleteResult,

    /// The result payload fits neither zlib nor raw-deflate framing.
    #[error("Decompression failed: {0}")]
    Decompression(String),

    /// A matched series is missing an expected numeric field.
    #[error("Malformed series record: {0}")]
    DataShape(String),

    /// pfdcm answered with `status: false`.
    #[error("pfdcm reported failure: {0}")]
    Remote(String),

    /// Non-success HTTP status outside the submission path.
    #[error("API error ({status}) at {url}: {message}")]
    Api {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body did not match the expected envelope.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Client was constructed with incomplete or invalid settings.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// True when the error came from the transport, not the remote service.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, Self::Http(_) | Self::Connection { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_timeout_reports_last_status() {
        let err = ClientError::PollTimeout {
            timeout: Duration::from_secs(60),
            last_status: "working".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("working"));
        assert!(msg.contains("60"));
    }

    #[test]
    fn test_submission_display() {
        let err = ClientError::Submission {
            status: 400,
            message: "title field required".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Query submission rejected (400): title field required"
        );
    }
}
