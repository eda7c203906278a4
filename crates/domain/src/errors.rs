//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid email address format
    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(String),

    /// Unknown IANA timezone name
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_timezone_error_message() {
        let err = DomainError::InvalidTimezone("Mars/Olympus".to_string());
        assert_eq!(err.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn invalid_email_error_message() {
        let err = DomainError::InvalidEmailAddress("jane@".to_string());
        assert_eq!(err.to_string(), "Invalid email address: jane@");
    }
}
