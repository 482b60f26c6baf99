//! Typed ID wrappers for domain entities.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

/// A strongly-typed wrapper for account IDs.
///
/// Account IDs are assigned by the store's auto-incrementing allocator,
/// starting at 1, and are never reused within a process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(pub i64);

impl AccountId {
    /// Creates an account ID from a raw integer.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Parses an account ID from a string.
    pub fn parse(s: &str) -> Result<Self, std::num::ParseIntError> {
        Ok(Self(s.parse()?))
    }

    /// Returns the inner integer.
    #[must_use]
    pub const fn into_inner(self) -> i64 {
        self.0
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for AccountId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<AccountId> for i64 {
    fn from(id: AccountId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_id_display_and_parse() {
        let id = AccountId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(AccountId::parse("42").unwrap(), id);
        assert!(AccountId::parse("not-a-number").is_err());
    }

    #[test]
    fn test_account_id_ordering() {
        assert!(AccountId::new(1) < AccountId::new(2));
    }

    #[test]
    fn test_account_id_serde_transparent() {
        let id = AccountId::new(7);
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: AccountId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
    }
}
