//! Management API client error types.

use std::time::Duration;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur talking to the management API.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    #[error("not found: {0}")]
    NotFound(String),

    #[error("authentication failed: {0}")]
    AuthFailed(String),

    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ClientError {
    /// Returns true if the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            ClientError::NotFound(_) => true,
            ClientError::Api { status, .. } => *status == 404,
            ClientError::Http(e) => e.status().is_some_and(|s| s.as_u16() == 404),
            _ => false,
        }
    }

    /// Returns true if this error represents a 429 rate-limit response.
    pub fn is_rate_limited(&self) -> bool {
        match self {
            ClientError::RateLimited { .. } => true,
            ClientError::Api { status, .. } => *status == 429,
            ClientError::Http(e) => e.status().is_some_and(|s| s.as_u16() == 429),
            _ => false,
        }
    }

    /// Returns the retry-after duration if this is a rate-limit error.
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            ClientError::RateLimited { retry_after_secs } => {
                Some(Duration::from_secs(*retry_after_secs))
            }
            _ => None,
        }
    }
}
