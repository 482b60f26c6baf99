//! # Veridian Service
//!
//! The identity service: the six-operation contract (create / get /
//! update / delete / login / verify) and all business rules, implemented
//! against the [`veridian_store::AccountStore`] abstraction.

pub mod dto;
pub mod identity_service;
pub mod r#impl;

pub use dto::*;
pub use identity_service::IdentityService;
pub use r#impl::IdentityServiceImpl;
