//! Tracing bootstrap.
//!
//! Structured logging setup for host processes and integration tests. A
//! host embedding the service calls [`init_tracing`] once before wiring
//! the stack.

use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Whether to emit logs as JSON.
    #[serde(default)]
    pub json_output: bool,
}

fn default_log_filter() -> String {
    "info,veridian=debug".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            json_output: false,
        }
    }
}

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured filter. Safe to call
/// only once per process; returns an error if a global subscriber is
/// already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> crate::IdentityResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter.clone()));

    let registry = tracing_subscriber::registry().with(filter);

    let result = if config.json_output {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .try_init()
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init()
    };

    result.map_err(|e| {
        crate::IdentityError::Configuration(format!("Failed to install tracing subscriber: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ObservabilityConfig::default();
        assert!(config.log_filter.contains("veridian"));
        assert!(!config.json_output);
    }
}
