//! SDK error types
//!
//! Failures fall into three groups: transport (`Transport`, `Http`,
//! `Timeout`), application-level (`Api`, a non-zero envelope code) and
//! local (`InvalidResponse`, `Config`). Nothing is retried automatically.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for SDK operations
pub type SdkResult<T> = Result<T, SdkError>;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// The request never produced an HTTP response
    #[error("Network error: {message}")]
    Transport {
        /// Error message
        message: String,
        /// Underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The backend answered with a non-2xx status
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Envelope message or response body excerpt
        message: String,
    },

    /// The envelope carried a non-zero code
    #[error("{message}")]
    Api {
        /// Envelope code
        code: i64,
        /// Envelope message
        message: String,
    },

    /// The body could not be decoded
    #[error("Invalid API response: {message}")]
    InvalidResponse {
        /// Error message
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message
        message: String,
    },

    /// Request timeout
    #[error("Request timed out after {duration:?}")]
    Timeout {
        /// Configured timeout
        duration: Duration,
    },
}

impl SdkError {
    /// Get the HTTP status code if available
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SdkError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened before a usable response arrived
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            SdkError::Transport { .. } | SdkError::Http { .. } | SdkError::Timeout { .. }
        )
    }

    /// Whether the backend rejected the request through the envelope
    pub fn is_api(&self) -> bool {
        matches!(self, SdkError::Api { .. })
    }

    /// Whether the backend refused because the caller is not signed in
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, SdkError::Http { status: 401, .. })
    }

    /// Map a reqwest failure, using the configured timeout for timeouts
    pub(crate) fn from_reqwest(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            SdkError::Timeout { duration: timeout }
        } else if err.is_connect() {
            SdkError::Transport {
                message: "Connection failed".to_string(),
                source: Some(Box::new(err)),
            }
        } else if err.is_decode() {
            SdkError::InvalidResponse {
                message: err.to_string(),
            }
        } else {
            SdkError::Transport {
                message: err.to_string(),
                source: Some(Box::new(err)),
            }
        }
    }
}

/// Convert from JSON errors
impl From<serde_json::Error> for SdkError {
    fn from(err: serde_json::Error) -> Self {
        SdkError::InvalidResponse {
            message: format!("Failed to parse response: {}", err),
        }
    }
}
