//! Account-related DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;
use veridian_core::{Account, AccountId};

/// Request to create a new account.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAccountRequest {
    /// Phone number; omitted means an empty phone on the record.
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(custom(
        function = veridian_core::validation::rules::not_blank,
        message = "Password must not be blank"
    ))]
    pub password: String,
}

/// Request to partially update an account.
///
/// Every field is an explicit presence-aware wrapper: `None` means "leave
/// untouched", while `Some("")` is a real overwrite. This is what keeps
/// partial-update semantics from collapsing into full overwrites.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateAccountRequest {
    pub phone: Option<String>,

    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,

    pub is_active: Option<bool>,
}

/// Request to authenticate by email and password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Request to verify an account by email and verification code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerifyAccountRequest {
    pub email: String,
    pub verification_code: String,
}

/// Account response DTO. Never carries the credential.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountResponse {
    pub id: AccountId,
    pub phone: String,
    pub email: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            phone: account.phone,
            email: account.email,
            is_active: account.is_active,
            is_verified: account.is_verified,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            phone: account.phone.clone(),
            email: account.email.clone(),
            is_active: account.is_active,
            is_verified: account.is_verified,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// Response to a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Opaque session token.
    pub token: String,
    pub account: AccountResponse,
}

/// Response to a delete request; `success` reports whether a record
/// existed and was removed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DeleteAccountResponse {
    pub success: bool,
}

/// Response to a verification attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VerifyAccountResponse {
    pub success: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_create_account_request_valid() {
        let request = CreateAccountRequest {
            phone: Some("555-0100".to_string()),
            email: "valid@example.com".to_string(),
            password: "password123".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_create_account_request_invalid_email() {
        let request = CreateAccountRequest {
            phone: None,
            email: "not-an-email".to_string(),
            password: "password123".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_account_request_empty_email() {
        let request = CreateAccountRequest {
            phone: None,
            email: String::new(),
            password: "password123".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_account_request_empty_password() {
        let request = CreateAccountRequest {
            phone: None,
            email: "valid@example.com".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_create_account_request_blank_password() {
        let request = CreateAccountRequest {
            phone: None,
            email: "valid@example.com".to_string(),
            password: "   ".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_account_request_absent_fields_are_valid() {
        let request = UpdateAccountRequest::default();
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_update_account_request_invalid_email() {
        let request = UpdateAccountRequest {
            email: Some("broken".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_account_response_from_account() {
        let account = Account::new(
            AccountId::new(4),
            "555-0100".to_string(),
            "a@x.com".to_string(),
            "pw".to_string(),
        );
        let response = AccountResponse::from(account.clone());

        assert_eq!(response.id, account.id);
        assert_eq!(response.phone, account.phone);
        assert_eq!(response.email, account.email);
        assert_eq!(response.is_active, account.is_active);
        assert_eq!(response.is_verified, account.is_verified);
        assert_eq!(response.created_at, account.created_at);
        assert_eq!(response.updated_at, account.updated_at);
    }

    #[test]
    fn test_account_response_never_serializes_password() {
        let account = Account::new(
            AccountId::new(1),
            String::new(),
            "a@x.com".to_string(),
            "hunter2".to_string(),
        );
        let json = serde_json::to_string(&AccountResponse::from(account)).unwrap();
        assert!(!json.contains("hunter2"));
        assert!(!json.contains("password"));
    }
}
