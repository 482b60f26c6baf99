//! Caller-side identity client.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;
use veridian_core::{AccountId, IdentityResult};
use veridian_service::{
    AccountResponse, CreateAccountRequest, DeleteAccountResponse, IdentityService, LoginRequest,
    LoginResponse, UpdateAccountRequest, VerifyAccountRequest, VerifyAccountResponse,
};

/// Caller-side proxy exposing one method per identity operation.
///
/// The client performs no validation and no retries; every failure
/// surfaced by the endpoint propagates unchanged. The endpoint is any
/// [`IdentityService`] implementation: the in-process service directly,
/// or a transport-backed adapter that carries calls to a remote process
/// (mapping errors through [`crate::status`] on the way back).
#[derive(Clone)]
pub struct IdentityClient {
    endpoint: Arc<dyn IdentityService>,
}

impl IdentityClient {
    /// Creates a client over the given endpoint.
    pub fn new(endpoint: Arc<dyn IdentityService>) -> Self {
        Self { endpoint }
    }
}

#[async_trait]
impl IdentityService for IdentityClient {
    async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> IdentityResult<AccountResponse> {
        debug!("Client CreateAccount: {}", request.email);
        self.endpoint.create_account(request).await
    }

    async fn get_account(&self, id: AccountId) -> IdentityResult<AccountResponse> {
        debug!("Client GetAccount: {}", id);
        self.endpoint.get_account(id).await
    }

    async fn update_account(
        &self,
        id: AccountId,
        request: UpdateAccountRequest,
    ) -> IdentityResult<AccountResponse> {
        debug!("Client UpdateAccount: {}", id);
        self.endpoint.update_account(id, request).await
    }

    async fn delete_account(&self, id: AccountId) -> IdentityResult<DeleteAccountResponse> {
        debug!("Client DeleteAccount: {}", id);
        self.endpoint.delete_account(id).await
    }

    async fn login(&self, request: LoginRequest) -> IdentityResult<LoginResponse> {
        debug!("Client Login: {}", request.email);
        self.endpoint.login(request).await
    }

    async fn verify_account(
        &self,
        request: VerifyAccountRequest,
    ) -> IdentityResult<VerifyAccountResponse> {
        debug!("Client VerifyAccount: {}", request.email);
        self.endpoint.verify_account(request).await
    }
}

impl std::fmt::Debug for IdentityClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityClient").finish_non_exhaustive()
    }
}
