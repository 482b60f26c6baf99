//! Validation utilities.

use crate::IdentityError;
use validator::{Validate, ValidationErrors};

/// Extension trait for request validation.
pub trait ValidateExt: Validate {
    /// Validates the struct and returns an `IdentityError` on failure.
    ///
    /// Validation happens before any state is mutated, so a failed call
    /// never leaves a partial mutation behind.
    fn validate_request(&self) -> Result<(), IdentityError> {
        self.validate().map_err(validation_errors_to_identity_error)
    }
}

impl<T: Validate> ValidateExt for T {}

/// Converts `validator::ValidationErrors` to an `InvalidArgument` error.
#[must_use]
pub fn validation_errors_to_identity_error(errors: ValidationErrors) -> IdentityError {
    let message = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                let detail = error
                    .message
                    .as_ref()
                    .map_or_else(|| error.code.to_string(), |m| m.to_string());
                format!("{}: {}", field, detail)
            })
        })
        .collect::<Vec<_>>()
        .join("; ");

    IdentityError::InvalidArgument(message)
}

/// Common validation functions.
pub mod rules {
    use validator::ValidationError;

    /// Validates that a string is not blank (not empty after trimming).
    pub fn not_blank(value: &str) -> Result<(), ValidationError> {
        if value.trim().is_empty() {
            return Err(ValidationError::new("not_blank"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct TestRequest {
        #[validate(email(message = "Invalid email address"))]
        email: String,
    }

    #[test]
    fn test_validate_request_ok() {
        let request = TestRequest {
            email: "valid@example.com".to_string(),
        };
        assert!(request.validate_request().is_ok());
    }

    #[test]
    fn test_validate_request_maps_to_invalid_argument() {
        let request = TestRequest {
            email: "not-an-email".to_string(),
        };
        match request.validate_request().unwrap_err() {
            IdentityError::InvalidArgument(msg) => {
                assert!(msg.contains("email"));
                assert!(msg.contains("Invalid email address"));
            }
            other => panic!("Expected InvalidArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_not_blank_rule() {
        assert!(rules::not_blank("value").is_ok());
        assert!(rules::not_blank("   ").is_err());
        assert!(rules::not_blank("").is_err());
    }
}
