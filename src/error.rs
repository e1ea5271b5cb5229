//! Error types for hal-collection
//!
//! Every validation failure is raised synchronously to the caller that
//! configured the collection. A rejected call never mutates state.

use std::convert::Infallible;
use thiserror::Error;

/// The main error type for hal-collection
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    /// The collection source was neither array-like nor iterable
    #[error("Invalid collection: expected an array or iterable source, received {kind}")]
    InvalidCollection { kind: String },

    /// A setter or accessor received an argument of the wrong shape
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid collection error
    pub fn invalid_collection(kind: impl Into<String>) -> Self {
        Self::InvalidCollection { kind: kind.into() }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this error came from input validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidCollection { .. } | Error::InvalidArgument { .. }
        )
    }
}

impl From<Infallible> for Error {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}

/// Result type alias for hal-collection
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_collection("number");
        assert_eq!(
            err.to_string(),
            "Invalid collection: expected an array or iterable source, received number"
        );

        let err = Error::invalid_argument("unknown property 'bogus'");
        assert_eq!(err.to_string(), "Invalid argument: unknown property 'bogus'");
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::invalid_collection("string").is_validation());
        assert!(Error::invalid_argument("x").is_validation());

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(!Error::from(json_err).is_validation());
    }
}
