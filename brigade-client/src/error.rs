//! Client error types

use shared::ServiceError;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend-reported error
    #[error("Backend error: {0}")]
    Backend(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

impl From<ClientError> for ServiceError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Unauthorized => ServiceError::Unauthorized,
            ClientError::Validation(msg) => ServiceError::Validation(msg),
            ClientError::NotFound(msg) => ServiceError::NotFound(msg),
            ClientError::Http(e) => ServiceError::Transport(e.to_string()),
            ClientError::Serialization(e) => ServiceError::Transport(e.to_string()),
            ClientError::InvalidResponse(msg) | ClientError::Backend(msg) => {
                ServiceError::Backend(msg)
            }
        }
    }
}
