//! Result type aliases for Veridian.

use crate::IdentityError;

/// A specialized `Result` type for identity operations.
pub type IdentityResult<T> = Result<T, IdentityError>;
