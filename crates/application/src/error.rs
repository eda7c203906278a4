//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
///
/// These surface to the protocol engine, which turns them into protocol-level
/// error responses.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The current account could not be resolved
    #[error("Not authorized: {0}")]
    NotAuthorized(String),

    /// External service error (contact store, export service, ...)
    #[error("External service error: {0}")]
    ExternalService(String),
}

impl ApplicationError {
    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalService(_))
    }
}
