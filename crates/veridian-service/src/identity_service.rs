//! Identity service trait definition.

use crate::dto::{
    AccountResponse, CreateAccountRequest, DeleteAccountResponse, LoginRequest, LoginResponse,
    UpdateAccountRequest, VerifyAccountRequest, VerifyAccountResponse,
};
use async_trait::async_trait;
use veridian_core::{AccountId, IdentityResult};

/// The identity service operation contract: one method per RPC-shaped
/// call. Implemented both by the service itself and by caller-side
/// clients, so an in-process service and a remote endpoint are
/// interchangeable behind `Arc<dyn IdentityService>`.
#[async_trait]
pub trait IdentityService: Send + Sync {
    /// Creates a new account with contract defaults (active, unverified).
    async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> IdentityResult<AccountResponse>;

    /// Gets an account by id. Fails with `NotFound` if absent.
    async fn get_account(&self, id: AccountId) -> IdentityResult<AccountResponse>;

    /// Partially updates an account: only fields present in the request
    /// are overwritten. Fails with `NotFound` if absent.
    async fn update_account(
        &self,
        id: AccountId,
        request: UpdateAccountRequest,
    ) -> IdentityResult<AccountResponse>;

    /// Deletes an account if present; the success flag reports whether a
    /// record existed. Never fails.
    async fn delete_account(&self, id: AccountId) -> IdentityResult<DeleteAccountResponse>;

    /// Authenticates against the first account whose email matches, in
    /// store iteration order. Fails with `Unauthenticated` if no account
    /// matches.
    async fn login(&self, request: LoginRequest) -> IdentityResult<LoginResponse>;

    /// Verifies the first account whose email matches: with the expected
    /// code the account is marked verified and `success` is true;
    /// otherwise nothing is mutated and `success` is false. Fails with
    /// `NotFound` if no account matches the email.
    async fn verify_account(
        &self,
        request: VerifyAccountRequest,
    ) -> IdentityResult<VerifyAccountResponse>;
}
