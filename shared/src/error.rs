//! Service error taxonomy
//!
//! Errors surfaced by the collaborator contracts in [`crate::service`].
//! The engine classifies these at the boundary of the operation the user
//! triggered; transport details stay inside the client crate.

use thiserror::Error;

/// Error reported by a backend collaborator
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Session expired or invalid - routes to re-authentication
    #[error("Authentication required")]
    Unauthorized,

    /// Request rejected by backend validation
    #[error("Validation rejected: {0}")]
    Validation(String),

    /// Referenced entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Network/transport failure before a backend response was read
    #[error("Transport error: {0}")]
    Transport(String),

    /// Any other backend-reported failure, message passed through verbatim
    #[error("{0}")]
    Backend(String),
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
