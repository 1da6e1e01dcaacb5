//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes so scripts can distinguish failure modes.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.

use cube_client::ClientError;

/// Structured exit codes for pacsquery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    #[allow(dead_code)]
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Connection error - network, DNS, or refused connection.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 2,

    /// Remote error - the registry or pfdcm rejected the request or broke
    /// its own contract.
    ///
    /// Scripts should not retry the same request.
    RemoteError = 3,

    /// Timeout - the query never reached `succeeded` within the poll budget.
    ///
    /// Scripts may retry later; the query remains registered.
    Timeout = 4,

    /// Invalid input - malformed directive or configuration.
    ///
    /// Scripts should fix the input and not retry.
    InvalidInput = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

/// Map an error chain to an exit code, looking for a [`ClientError`] root.
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<ClientError>() {
        Some(e) if e.is_connectivity() => ExitCode::ConnectionError,
        Some(ClientError::PollTimeout { .. }) => ExitCode::Timeout,
        Some(ClientError::Config(_)) => ExitCode::InvalidInput,
        Some(_) => ExitCode::RemoteError,
        None => {
            if error.downcast_ref::<pacs_config::ConfigError>().is_some()
                || error.downcast_ref::<serde_json::Error>().is_some()
            {
                ExitCode::InvalidInput
            } else {
                ExitCode::GeneralError
            }
        }
    }
}
