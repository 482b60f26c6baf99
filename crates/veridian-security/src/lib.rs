//! # Veridian Security
//!
//! Trait seams for the three behaviors the identity contract leaves as
//! non-secure stand-ins: credential verification, token issuance, and
//! verification-code checking. The reference implementations here
//! reproduce the documented placeholder behavior; a production deployment
//! swaps each for a cryptographic equivalent without touching the
//! operation contract.

pub mod credential;
pub mod token;
pub mod verification;

pub use credential::{AcceptAllVerifier, CredentialVerifier};
pub use token::{PlaceholderTokenIssuer, TokenIssuer};
pub use verification::{FixedCodePolicy, VerificationPolicy};
