//! Chat-completion errors

use thiserror::Error;

/// Errors that can occur while obtaining a completion
#[derive(Debug, Error)]
pub enum ChatError {
    /// Invalid client configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Failed to connect to the provider
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request could not be completed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Timeout while waiting for the provider
    #[error("Completion timeout after {0}ms")]
    Timeout(u64),

    /// Response body could not be decoded as JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// The provider completed the call but reported an error; the
    /// message is relayed verbatim
    #[error("Provider error: {0}")]
    Provider(String),

    /// The body matched neither the success nor the error shape; the
    /// raw body is attached for diagnosis
    #[error("Unexpected response shape: {0}")]
    UnexpectedResponse(String),
}

impl ChatError {
    /// Classify a transport-level failure, attributing timeouts to
    /// the configured deadline
    #[must_use]
    pub fn from_transport(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
