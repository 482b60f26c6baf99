//! Unified error types for all layers of the service.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for Veridian.
///
/// The contract defines two terminal failure kinds (`NotFound` and
/// `Unauthenticated`); `InvalidArgument` is the input-validation extension
/// point, and the remaining variants cover infrastructure failures a
/// durable store backend may introduce.
#[derive(Error, Debug)]
pub enum IdentityError {
    /// Referenced id or email has no matching record.
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
    },

    /// Login could not find a matching credential.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// Malformed input, rejected before any state is mutated.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Account store failure (durable backends only; the in-memory
    /// reference store cannot fail).
    #[error("Store error: {0}")]
    Store(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Generic error wrapper.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl IdentityError {
    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Unauthenticated(_) => "UNAUTHENTICATED",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
            Self::Store(_) => "STORE_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) | Self::Other(_) => "INTERNAL_ERROR",
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
        }
    }

    /// Creates an unauthenticated error.
    #[must_use]
    pub fn unauthenticated<T: Into<String>>(message: T) -> Self {
        Self::Unauthenticated(message.into())
    }

    /// Creates an invalid argument error.
    #[must_use]
    pub fn invalid_argument<T: Into<String>>(message: T) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a store error.
    #[must_use]
    pub fn store<T: Into<String>>(message: T) -> Self {
        Self::Store(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// Checks if this error is retriable.
    ///
    /// Only infrastructure failures are; contract failures (`NotFound`,
    /// `Unauthenticated`, `InvalidArgument`) are terminal for the call.
    #[must_use]
    pub const fn is_retriable(&self) -> bool {
        matches!(self, Self::Store(_))
    }
}

impl From<serde_json::Error> for IdentityError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error payload for transport-layer responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ErrorBody {
    /// Creates a new error body from an [`IdentityError`].
    #[must_use]
    pub fn from_error(error: &IdentityError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
        }
    }
}

impl From<&IdentityError> for ErrorBody {
    fn from(error: &IdentityError) -> Self {
        Self::from_error(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(IdentityError::not_found("Account", 1).error_code(), "NOT_FOUND");
        assert_eq!(
            IdentityError::unauthenticated("invalid email or password").error_code(),
            "UNAUTHENTICATED"
        );
        assert_eq!(
            IdentityError::invalid_argument("email must not be empty").error_code(),
            "INVALID_ARGUMENT"
        );
        assert_eq!(IdentityError::store("io timeout").error_code(), "STORE_ERROR");
        assert_eq!(IdentityError::internal("oops").error_code(), "INTERNAL_ERROR");
    }

    #[test]
    fn test_retriable_errors() {
        assert!(IdentityError::store("connection lost").is_retriable());
        assert!(!IdentityError::not_found("Account", 1).is_retriable());
        assert!(!IdentityError::unauthenticated("no match").is_retriable());
        assert!(!IdentityError::invalid_argument("bad input").is_retriable());
    }

    #[test]
    fn test_error_constructors() {
        let not_found = IdentityError::not_found("Account", "42");
        assert!(not_found.to_string().contains("Account"));
        assert!(not_found.to_string().contains("42"));

        let unauthenticated = IdentityError::unauthenticated("no matching credential");
        assert!(unauthenticated.to_string().contains("no matching credential"));

        let invalid = IdentityError::invalid_argument("email: invalid");
        assert!(invalid.to_string().contains("email: invalid"));
    }

    #[test]
    fn test_error_body_from_error() {
        let err = IdentityError::not_found("Account", 7);
        let body = ErrorBody::from_error(&err);
        assert_eq!(body.code, "NOT_FOUND");
        assert!(!body.message.is_empty());
    }

    #[test]
    fn test_error_body_from_ref() {
        let err = IdentityError::unauthenticated("denied");
        let body: ErrorBody = ErrorBody::from(&err);
        assert_eq!(body.code, "UNAUTHENTICATED");
    }
}
