//! # Veridian Core
//!
//! Core types, traits, and error definitions for the Veridian identity
//! service. This crate provides the foundational abstractions used across
//! all layers: the error taxonomy, the `Account` entity, identifier types,
//! validation helpers, and tracing bootstrap.

pub mod domain;
pub mod error;
pub mod id;
pub mod result;
pub mod telemetry;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use result::*;
pub use telemetry::*;
pub use validation::*;
