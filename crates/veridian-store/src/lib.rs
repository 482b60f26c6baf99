//! # Veridian Store
//!
//! The account store owns the authoritative set of account records,
//! assigns identifiers, and enforces per-record mutation atomicity. The
//! [`AccountStore`] trait is the seam a durable backend implements; the
//! reference implementation here is volatile and in-memory.

pub mod memory;
pub mod traits;

pub use memory::InMemoryAccountStore;
pub use traits::{AccountMutator, AccountStore};
