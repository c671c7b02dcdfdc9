//! Upstream fetch errors.

use budgetcoach_shared::AppError;
use serde_json::Value;
use thiserror::Error;

/// Why a read from the upstream API failed.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The upstream host could not be reached.
    #[error("upstream unreachable: {0}")]
    Connect(String),

    /// The upstream did not answer within the client timeout.
    #[error("upstream timed out: {0}")]
    Timeout(String),

    /// The upstream answered with a non-2xx status.
    #[error("upstream returned status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, parsed as JSON when possible.
        body: Value,
    },

    /// The upstream answered 2xx but the body carries an `error` field.
    #[error("upstream reported an error: {0}")]
    Upstream(String),

    /// The body could not be decoded.
    #[error("invalid upstream response: {0}")]
    Decode(String),

    /// Any other transport failure.
    #[error("upstream request failed: {0}")]
    Request(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout(err.to_string())
        } else if err.is_connect() {
            Self::Connect(err.to_string())
        } else if err.is_decode() {
            Self::Decode(err.to_string())
        } else {
            Self::Request(err.to_string())
        }
    }
}

impl From<FetchError> for AppError {
    fn from(err: FetchError) -> Self {
        match err {
            FetchError::Connect(_) => Self::ServiceUnavailable(err.to_string()),
            FetchError::Timeout(_) => Self::GatewayTimeout(err.to_string()),
            FetchError::Status { status: 404, .. } => Self::NotFound(err.to_string()),
            FetchError::Status { .. } | FetchError::Upstream(_) | FetchError::Decode(_) => {
                Self::BadGateway(err.to_string())
            }
            FetchError::Request(_) => Self::Internal(err.to_string()),
        }
    }
}
