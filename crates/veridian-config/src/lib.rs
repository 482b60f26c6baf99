//! # Veridian Config
//!
//! Layered configuration: defaults, environment-specific TOML files, local
//! overrides, and `VERIDIAN_`-prefixed environment variables.

pub mod app_config;
pub mod loader;

pub use app_config::*;
pub use loader::*;
