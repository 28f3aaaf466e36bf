//! Error types for Quire operations.
//!
//! This module provides the common `Error` type and `Result<T>` alias used
//! across all Quire crates. Uses `thiserror` for derive macros.

use thiserror::Error;

/// Errors that can occur in Quire operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The user is not on the access-control list.
    #[error("Access denied for user {username}")]
    AccessDenied {
        /// Username that failed the access check.
        username: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create an access-denied error for `username`.
    pub fn access_denied(username: impl Into<String>) -> Self {
        Self::AccessDenied {
            username: username.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Whether this error is an access-control denial.
    pub fn is_access_denied(&self) -> bool {
        matches!(self, Self::AccessDenied { .. })
    }

    /// The denied username, if this is an access-control denial.
    pub fn denied_username(&self) -> Option<&str> {
        match self {
            Self::AccessDenied { username } => Some(username),
            _ => None,
        }
    }
}

/// Result type alias using Quire's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_denied_display() {
        let e = Error::access_denied("sami");
        assert_eq!(e.to_string(), "Access denied for user sami");
    }

    #[test]
    fn test_access_denied_inspectors() {
        let e = Error::access_denied("sami");
        assert!(e.is_access_denied());
        assert_eq!(e.denied_username(), Some("sami"));
    }

    #[test]
    fn test_config_error() {
        let e = Error::config("bad file");
        assert_eq!(e.to_string(), "Configuration error: bad file");
        assert!(!e.is_access_denied());
        assert!(e.denied_username().is_none());
    }

    #[test]
    fn test_io_error_from() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let e: Error = io.into();
        assert!(matches!(e, Error::Io(_)));
        assert!(e.to_string().starts_with("I/O error:"));
    }
}
