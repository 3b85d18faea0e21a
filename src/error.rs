//! Error types for the repolens CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for repolens operations.
///
/// Each variant maps to a distinct exit code so scripts can tell upstream
/// failures apart from local ones. The patch parser itself never produces an
/// error; every variant here originates in argument handling, configuration,
/// or the GitHub API collaborator.
#[derive(Error, Debug)]
pub enum RepolensError {
    /// User provided invalid arguments, an unreadable input file, or a bad
    /// config file.
    #[error("{0}")]
    UserError(String),

    /// The requested upstream resource does not exist (HTTP 404).
    #[error("not found: {0}")]
    NotFound(String),

    /// The API rate limit is exhausted (HTTP 429, or 403 with no remaining
    /// quota).
    #[error("rate limited: {0}")]
    RateLimited(String),

    /// The upstream API rejected the request or returned a malformed body.
    #[error("GitHub API error (HTTP {status}): {message}")]
    Upstream { status: u16, message: String },

    /// The request never completed: DNS, connect, TLS, or timeout failure.
    #[error("network error: {0}")]
    Network(String),
}

impl RepolensError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            RepolensError::UserError(_) => exit_codes::USER_ERROR,
            RepolensError::NotFound(_) => exit_codes::NOT_FOUND,
            RepolensError::RateLimited(_) => exit_codes::RATE_LIMITED,
            RepolensError::Upstream { .. } => exit_codes::UPSTREAM_FAILURE,
            RepolensError::Network(_) => exit_codes::NETWORK_FAILURE,
        }
    }
}

/// Result type alias for repolens operations.
pub type Result<T> = std::result::Result<T, RepolensError>;
