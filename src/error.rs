//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on a contact record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// No phone entry matches the requested number
    #[error("Number {0} not found")]
    PhoneNotFound(String),

    /// A name or phone value failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RecordError::PhoneNotFound("1234567890".to_string());
        assert_eq!(err.to_string(), "Number 1234567890 not found");

        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "Cannot be empty".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid value for LOG_LEVEL: Cannot be empty");
    }

    #[test]
    fn test_validation_error_converts() {
        let err: RecordError = ValidationError::EmptyName.into();
        assert_eq!(err, RecordError::Validation(ValidationError::EmptyName));
        assert_eq!(err.to_string(), "Contact name cannot be empty");
    }
}
