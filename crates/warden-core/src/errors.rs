//! Unified error system for Warden core
//!
//! A single error type for configuration loading.
//! Authority operations and identifier derivation keep their own narrow
//! error types in [`crate::authority`] so the orchestrator can tell them apart
//! in its diagnostics.

use serde::{Deserialize, Serialize};

/// Unified error type for Warden operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum WardenError {
    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Resource not found
    #[error("Not found: {message}")]
    NotFound {
        /// Error message describing what was not found
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message describing the serialization failure
        message: String,
    },

    /// Filesystem or other I/O failure
    #[error("I/O error: {message}")]
    Io {
        /// Error message describing the I/O failure
        message: String,
    },
}

impl WardenError {
    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an I/O error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Prefix the error message with `context`, keeping the error kind
    pub fn with_context(self, context: impl std::fmt::Display) -> Self {
        let prefix = |message: String| format!("{context}: {message}");
        match self {
            Self::Invalid { message } => Self::Invalid {
                message: prefix(message),
            },
            Self::NotFound { message } => Self::NotFound {
                message: prefix(message),
            },
            Self::Serialization { message } => Self::Serialization {
                message: prefix(message),
            },
            Self::Io { message } => Self::Io {
                message: prefix(message),
            },
        }
    }
}

impl From<std::io::Error> for WardenError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::not_found(err.to_string()),
            _ => Self::io(err.to_string()),
        }
    }
}

impl From<toml::de::Error> for WardenError {
    fn from(err: toml::de::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = WardenError::invalid("test message");
        assert!(matches!(err, WardenError::Invalid { .. }));
        assert_eq!(err.to_string(), "Invalid: test message");
    }

    #[test]
    fn test_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = WardenError::from(io_err);
        assert!(matches!(err, WardenError::NotFound { .. }));

        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = WardenError::from(io_err);
        assert!(matches!(err, WardenError::Io { .. }));
    }

    #[test]
    fn test_with_context_keeps_kind() {
        let err = WardenError::not_found("missing.toml").with_context("Failed to read config");
        assert_eq!(err, WardenError::not_found("Failed to read config: missing.toml"));
    }

    #[test]
    fn test_toml_error_is_serialization() {
        let toml_err = toml::from_str::<toml::Value>("authorities = [").unwrap_err();
        let err = WardenError::from(toml_err);
        assert!(matches!(err, WardenError::Serialization { .. }));
    }
}
