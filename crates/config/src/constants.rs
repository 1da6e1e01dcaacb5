//! Default values shared between the config loader and the client crates.
//!
//! Responsibilities:
//! - Define default polling and connection parameters in one place.
//!
//! Invariants:
//! - Defaults match the behavior of the CUBE PACS query API documentation:
//!   a query is polled every 3 seconds for at most 60 seconds.

/// Default wall-clock budget for polling a query to completion, in seconds.
pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 60;

/// Default delay between two status polls, in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 3;

/// Default per-request HTTP timeout, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default PACS service name registered with pfdcm.
pub const DEFAULT_PACS_NAME: &str = "MINICHRISORTHANC";
