//! Verification-code seam.

use veridian_config::VerificationConfig;
use veridian_core::{Account, IdentityResult};

/// Interface for checking a supplied verification code for an account.
pub trait VerificationPolicy: Send + Sync {
    /// Returns whether the supplied code is the expected one for the
    /// account. A mismatch is not an error: the operation reports
    /// `success = false` without mutating anything.
    fn check(&self, supplied: &str, account: &Account) -> IdentityResult<bool>;
}

/// Reference policy comparing against one universal expected code.
///
/// The default code is `"123456"`; it can be overridden from
/// configuration. Production deployments replace this with per-account
/// codes, keeping the same boolean outcome shape.
#[derive(Debug, Clone)]
pub struct FixedCodePolicy {
    expected_code: String,
}

impl FixedCodePolicy {
    /// Creates the reference policy with the default code.
    #[must_use]
    pub fn new() -> Self {
        Self::from_config(&VerificationConfig::default())
    }

    /// Creates the policy from configuration.
    #[must_use]
    pub fn from_config(config: &VerificationConfig) -> Self {
        Self {
            expected_code: config.expected_code.clone(),
        }
    }
}

impl Default for FixedCodePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl VerificationPolicy for FixedCodePolicy {
    fn check(&self, supplied: &str, _account: &Account) -> IdentityResult<bool> {
        Ok(supplied == self.expected_code)
    }
}
