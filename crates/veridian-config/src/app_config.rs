//! Application configuration structures.

use serde::{Deserialize, Serialize};
use veridian_core::ObservabilityConfig;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Account verification configuration.
    #[serde(default)]
    pub verification: VerificationConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "veridian".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Account verification configuration.
///
/// The reference verification policy compares against a single expected
/// code. A production deployment replaces the policy with per-account
/// codes; this section then only carries its delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationConfig {
    /// The expected verification code.
    pub expected_code: String,
}

impl Default for VerificationConfig {
    fn default() -> Self {
        Self {
            expected_code: "123456".to_string(),
        }
    }
}
