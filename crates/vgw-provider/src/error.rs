//! Error types for provider transport operations

use thiserror::Error;
use vgw_core::GatewayError;

/// Result type alias for provider transport operations
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Errors that can occur while talking to the telemetry provider
#[derive(Error, Debug)]
pub enum ProviderError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Response body was not JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::HttpError(e) => GatewayError::Transport(e.to_string()),
            ProviderError::InvalidUrl(e) => GatewayError::Transport(e.to_string()),
            ProviderError::ParseError(msg) => GatewayError::MalformedResponse(msg),
        }
    }
}
