//! Identity service implementation.

use crate::dto::{
    AccountResponse, CreateAccountRequest, DeleteAccountResponse, LoginRequest, LoginResponse,
    UpdateAccountRequest, VerifyAccountRequest, VerifyAccountResponse,
};
use crate::identity_service::IdentityService;
use async_trait::async_trait;
use futures::StreamExt;
use std::sync::Arc;
use tracing::{debug, info};
use veridian_core::{Account, AccountId, IdentityError, IdentityResult, ValidateExt};
use veridian_security::{
    AcceptAllVerifier, CredentialVerifier, FixedCodePolicy, PlaceholderTokenIssuer, TokenIssuer,
    VerificationPolicy,
};
use veridian_store::AccountStore;

/// Identity service implementation.
///
/// Holds all business rules; the store, credential verifier, token
/// issuer, and verification policy are injected seams. Every operation
/// validates before it mutates, so a failed call never leaves a partial
/// mutation behind, and store errors are surfaced unchanged.
pub struct IdentityServiceImpl<S: AccountStore> {
    store: Arc<S>,
    credentials: Arc<dyn CredentialVerifier>,
    tokens: Arc<dyn TokenIssuer>,
    verification: Arc<dyn VerificationPolicy>,
}

impl<S: AccountStore> IdentityServiceImpl<S> {
    /// Creates a new identity service with explicit seams.
    pub fn new(
        store: Arc<S>,
        credentials: Arc<dyn CredentialVerifier>,
        tokens: Arc<dyn TokenIssuer>,
        verification: Arc<dyn VerificationPolicy>,
    ) -> Self {
        Self {
            store,
            credentials,
            tokens,
            verification,
        }
    }

    /// Creates a service wired with the reference placeholder seams:
    /// accept-all credentials, `token-{id}` tokens, fixed `"123456"`
    /// verification code.
    pub fn with_reference_policies(store: Arc<S>) -> Self {
        Self::new(
            store,
            Arc::new(AcceptAllVerifier::new()),
            Arc::new(PlaceholderTokenIssuer::new()),
            Arc::new(FixedCodePolicy::new()),
        )
    }

    /// Returns the first account whose email matches, in store iteration
    /// order. Linear scan by design: email is not an indexed key, and
    /// duplicates resolve to the first-created record.
    async fn first_by_email(&self, email: &str) -> IdentityResult<Option<Account>> {
        let mut stream = self.store.scan().await?;
        while let Some(account) = stream.next().await {
            if account.email == email {
                return Ok(Some(account));
            }
        }
        Ok(None)
    }
}

#[async_trait]
impl<S: AccountStore + 'static> IdentityService for IdentityServiceImpl<S> {
    async fn create_account(
        &self,
        request: CreateAccountRequest,
    ) -> IdentityResult<AccountResponse> {
        debug!("Creating account: {}", request.email);

        request.validate_request()?;

        let id = self.store.allocate().await?;
        let account = Account::new(
            id,
            request.phone.unwrap_or_default(),
            request.email,
            request.password,
        );
        self.store.put(account.clone()).await?;

        info!("Account created: {}", id);
        Ok(AccountResponse::from(account))
    }

    async fn get_account(&self, id: AccountId) -> IdentityResult<AccountResponse> {
        debug!("Getting account: {}", id);

        let account = self
            .store
            .get(id)
            .await?
            .ok_or_else(|| IdentityError::not_found("Account", id))?;

        Ok(AccountResponse::from(account))
    }

    async fn update_account(
        &self,
        id: AccountId,
        request: UpdateAccountRequest,
    ) -> IdentityResult<AccountResponse> {
        debug!("Updating account: {}", id);

        request.validate_request()?;

        let UpdateAccountRequest {
            phone,
            email,
            is_active,
        } = request;

        let updated = self
            .store
            .update(
                id,
                Box::new(move |account| account.apply_update(phone, email, is_active)),
            )
            .await?
            .ok_or_else(|| IdentityError::not_found("Account", id))?;

        info!("Account updated: {}", id);
        Ok(AccountResponse::from(updated))
    }

    async fn delete_account(&self, id: AccountId) -> IdentityResult<DeleteAccountResponse> {
        debug!("Deleting account: {}", id);

        let success = self.store.delete(id).await?;

        if success {
            info!("Account deleted: {}", id);
        }
        Ok(DeleteAccountResponse { success })
    }

    async fn login(&self, request: LoginRequest) -> IdentityResult<LoginResponse> {
        debug!("Login attempt: {}", request.email);

        let account = self
            .first_by_email(&request.email)
            .await?
            .ok_or_else(|| IdentityError::unauthenticated("Invalid email or password"))?;

        if !self.credentials.verify(&request.password, &account)? {
            return Err(IdentityError::unauthenticated("Invalid email or password"));
        }

        let token = self.tokens.issue(&account)?;

        info!("Login succeeded: {}", account.id);
        Ok(LoginResponse {
            token,
            account: AccountResponse::from(account),
        })
    }

    async fn verify_account(
        &self,
        request: VerifyAccountRequest,
    ) -> IdentityResult<VerifyAccountResponse> {
        debug!("Verification attempt: {}", request.email);

        let account = self
            .first_by_email(&request.email)
            .await?
            .ok_or_else(|| IdentityError::not_found("Account", &request.email))?;

        if !self
            .verification
            .check(&request.verification_code, &account)?
        {
            debug!("Verification code mismatch for account {}", account.id);
            return Ok(VerifyAccountResponse { success: false });
        }

        let id = account.id;
        self.store
            .update(id, Box::new(Account::mark_verified))
            .await?
            .ok_or_else(|| IdentityError::not_found("Account", id))?;

        info!("Account verified: {}", id);
        Ok(VerifyAccountResponse { success: true })
    }
}

impl<S: AccountStore> std::fmt::Debug for IdentityServiceImpl<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IdentityServiceImpl").finish_non_exhaustive()
    }
}
