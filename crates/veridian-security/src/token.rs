//! Token issuance seam.

use veridian_core::{Account, IdentityResult};

/// Interface for issuing an opaque session token on successful login.
pub trait TokenIssuer: Send + Sync {
    /// Issues a token for the given account.
    fn issue(&self, account: &Account) -> IdentityResult<String>;
}

/// Reference issuer deriving the token deterministically from the
/// account id (`token-{id}`).
///
/// A production deployment replaces this with a signed credential (e.g.
/// JWT) carrying the same string shape through the contract.
#[derive(Debug, Clone)]
pub struct PlaceholderTokenIssuer {
    prefix: String,
}

impl PlaceholderTokenIssuer {
    /// Creates the reference issuer with the default `token-` prefix.
    #[must_use]
    pub fn new() -> Self {
        Self {
            prefix: "token-".to_string(),
        }
    }

    /// Creates the reference issuer with a custom prefix.
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for PlaceholderTokenIssuer {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenIssuer for PlaceholderTokenIssuer {
    fn issue(&self, account: &Account) -> IdentityResult<String> {
        Ok(format!("{}{}", self.prefix, account.id))
    }
}
