//! Account entity.

use crate::AccountId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user account, the sole entity of the identity service.
///
/// The verified and active flags are independent orthogonal state, not a
/// single enum: an account moves `Created(active, unverified) →
/// [Verified] → [Active|Inactive] → Deleted`, where deletion erases the
/// record entirely (no soft-delete, no versioning).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier, assigned exactly once at creation by the store's
    /// allocator. Never reassigned or recycled after deletion.
    pub id: AccountId,

    /// Phone number; optional at the contract level, so it may be empty.
    pub phone: String,

    /// Email address. Not unique: login and verify resolve duplicates by
    /// first match in store iteration order.
    pub email: String,

    /// Opaque credential placeholder (never exposed via API).
    #[serde(skip_serializing, default)]
    pub password: String,

    /// Whether the account is active.
    pub is_active: bool,

    /// Whether the account's email has been verified.
    pub is_verified: bool,

    /// Account creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last mutation timestamp. Invariant: `created_at <= updated_at`.
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Materializes a new account with contract defaults: active,
    /// unverified, both timestamps stamped to now.
    #[must_use]
    pub fn new(id: AccountId, phone: String, email: String, password: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            phone,
            email,
            password,
            is_active: true,
            is_verified: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Applies a partial update: only fields explicitly present are
    /// overwritten, and `updated_at` is stamped.
    pub fn apply_update(
        &mut self,
        phone: Option<String>,
        email: Option<String>,
        is_active: Option<bool>,
    ) {
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
        self.updated_at = Utc::now();
    }

    /// Marks the account's email as verified and stamps `updated_at`.
    pub fn mark_verified(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Deactivates the account and stamps `updated_at`.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.updated_at = Utc::now();
    }
}
