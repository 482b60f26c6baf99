//! Identity service implementations.
//!
//! This module contains the concrete implementation of the service trait.
//! The trait definition lives in the parent module (`identity_service.rs`).

pub mod identity_service_impl;

pub use identity_service_impl::IdentityServiceImpl;
