//! Credential verification seam.

use tracing::warn;
use veridian_core::{Account, IdentityResult};

/// Interface for verifying a supplied credential against an account.
///
/// Login resolves the account by email first; the verifier then decides
/// whether the supplied password is acceptable for that account.
pub trait CredentialVerifier: Send + Sync {
    /// Verifies a supplied password against the stored credential.
    fn verify(&self, supplied: &str, account: &Account) -> IdentityResult<bool>;
}

/// Reference verifier that accepts any password.
///
/// This reproduces the documented placeholder behavior: login succeeds
/// for any password as long as the email matches an account. Production
/// deployments must replace this with a hash comparison (e.g. Argon2)
/// keeping the same success/failure shape.
#[derive(Debug, Clone, Default)]
pub struct AcceptAllVerifier;

impl AcceptAllVerifier {
    /// Creates the reference verifier.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl CredentialVerifier for AcceptAllVerifier {
    fn verify(&self, _supplied: &str, account: &Account) -> IdentityResult<bool> {
        warn!(
            account_id = %account.id,
            "Placeholder credential verifier in use; password not checked"
        );
        Ok(true)
    }
}
