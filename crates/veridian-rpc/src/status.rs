//! Error-kind mapping between [`IdentityError`] and `tonic::Status`.
//!
//! The transport contract requires that the error kind survive the trip:
//! a `NotFound` raised by the service must still be a `NotFound` when it
//! reaches the caller. These two functions are the single place that
//! mapping lives for any gRPC-shaped transport.

use tonic::{Code, Status};
use tracing::error;
use veridian_core::IdentityError;

/// Converts a service-side error into a transport status.
pub fn to_status(err: IdentityError) -> Status {
    error!("RPC error: {:?}", err);

    match err {
        IdentityError::NotFound { .. } => Status::not_found(err.to_string()),
        IdentityError::Unauthenticated(msg) => Status::unauthenticated(msg),
        IdentityError::InvalidArgument(msg) => Status::invalid_argument(msg),
        IdentityError::Store(msg) => Status::unavailable(msg),
        _ => Status::internal(err.to_string()),
    }
}

/// Converts a transport status back into the caller-side error kind.
pub fn status_to_error(status: Status) -> IdentityError {
    match status.code() {
        Code::NotFound => IdentityError::NotFound {
            resource_type: "Resource",
            id: status.message().to_string(),
        },
        Code::Unauthenticated => IdentityError::Unauthenticated(status.message().to_string()),
        Code::InvalidArgument => IdentityError::InvalidArgument(status.message().to_string()),
        Code::Unavailable => IdentityError::Store(status.message().to_string()),
        _ => IdentityError::Internal(format!("RPC error: {}", status.message())),
    }
}
