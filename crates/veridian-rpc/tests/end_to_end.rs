//! Client → service → store scenarios over the full in-process stack.

use std::sync::{Arc, Once};
use veridian_core::{init_tracing, AccountId, IdentityError, ObservabilityConfig};
use veridian_rpc::IdentityClient;
use veridian_service::{
    CreateAccountRequest, IdentityService, IdentityServiceImpl, LoginRequest,
    UpdateAccountRequest, VerifyAccountRequest,
};
use veridian_store::InMemoryAccountStore;

fn init_tracing_once() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = init_tracing(&ObservabilityConfig::default());
    });
}

fn client() -> IdentityClient {
    init_tracing_once();
    let store = Arc::new(InMemoryAccountStore::new());
    let service = IdentityServiceImpl::with_reference_policies(store);
    IdentityClient::new(Arc::new(service))
}

fn create_request(email: &str) -> CreateAccountRequest {
    CreateAccountRequest {
        phone: None,
        email: email.to_string(),
        password: "password123".to_string(),
    }
}

#[tokio::test]
async fn full_lifecycle_create_update_verify_delete() {
    let client = client();

    let created = client.create_account(create_request("user@x.com")).await.unwrap();
    assert_eq!(created.id, AccountId::new(1));
    assert!(created.is_active);
    assert!(!created.is_verified);

    let fetched = client.get_account(created.id).await.unwrap();
    assert_eq!(fetched, created);

    let updated = client
        .update_account(
            created.id,
            UpdateAccountRequest {
                phone: Some("555-0199".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.phone, "555-0199");
    assert_eq!(updated.email, "user@x.com");

    let verified = client
        .verify_account(VerifyAccountRequest {
            email: "user@x.com".to_string(),
            verification_code: "123456".to_string(),
        })
        .await
        .unwrap();
    assert!(verified.success);
    assert!(client.get_account(created.id).await.unwrap().is_verified);

    let deleted = client.delete_account(created.id).await.unwrap();
    assert!(deleted.success);
    assert!(matches!(
        client.get_account(created.id).await,
        Err(IdentityError::NotFound { .. })
    ));
}

#[tokio::test]
async fn duplicate_email_login_returns_first_created() {
    let client = client();

    let first = client.create_account(create_request("a@x.com")).await.unwrap();
    let second = client.create_account(create_request("a@x.com")).await.unwrap();
    assert_eq!(first.id, AccountId::new(1));
    assert_eq!(second.id, AccountId::new(2));

    let response = client
        .login(LoginRequest {
            email: "a@x.com".to_string(),
            password: "anything-at-all".to_string(),
        })
        .await
        .unwrap();

    assert_eq!(response.account.id, first.id);
    assert_eq!(response.token, "token-1");
}

#[tokio::test]
async fn ids_survive_deletion_without_reuse() {
    let client = client();

    let first = client.create_account(create_request("a@x.com")).await.unwrap();
    client.delete_account(first.id).await.unwrap();

    let second = client.create_account(create_request("b@x.com")).await.unwrap();
    assert_eq!(second.id, AccountId::new(2));
}

#[tokio::test]
async fn failures_propagate_unchanged_through_the_client() {
    let client = client();

    // The client adds no behavior of its own: the service's error kinds
    // arrive untouched.
    assert!(matches!(
        client.get_account(AccountId::new(42)).await,
        Err(IdentityError::NotFound { .. })
    ));
    assert!(matches!(
        client
            .login(LoginRequest {
                email: "nobody@x.com".to_string(),
                password: "pw".to_string(),
            })
            .await,
        Err(IdentityError::Unauthenticated(_))
    ));
    assert!(matches!(
        client.create_account(create_request("not-an-email")).await,
        Err(IdentityError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn wrong_verification_code_is_reported_not_raised() {
    let client = client();
    client.create_account(create_request("a@x.com")).await.unwrap();

    let response = client
        .verify_account(VerifyAccountRequest {
            email: "a@x.com".to_string(),
            verification_code: "999999".to_string(),
        })
        .await
        .unwrap();

    assert!(!response.success);
}

#[test]
fn tracing_bootstrap_rejects_second_install() {
    init_tracing_once();

    // The global subscriber is already installed, so a second bootstrap
    // reports a configuration error instead of panicking.
    let err = init_tracing(&ObservabilityConfig::default()).unwrap_err();
    assert!(matches!(err, IdentityError::Configuration(_)));
}
