//! # Veridian RPC
//!
//! The caller-facing side of the identity contract: the [`IdentityClient`]
//! proxy and the error-kind mapping a wire transport needs to carry
//! failures across a process boundary unchanged.
//!
//! The transport itself (framing, routing, serialization) is a pluggable
//! external collaborator; this crate defines the seam it plugs into.

pub mod client;
pub mod status;

pub use client::IdentityClient;
pub use status::{status_to_error, to_status};
