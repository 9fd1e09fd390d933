//! Request and response payloads for the authentication endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::validation::rules;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
/// Credentials submitted by an existing account.
pub struct SigninBody {
    /// Address the account was registered under.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Declared field order of [`SigninBody`], used when reporting failures.
pub const SIGNIN_FIELDS: &[&str] = &["email", "password"];

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
/// Payload for registering a new account.
pub struct SignupBody {
    /// Optional display name; letters only when present.
    #[validate(custom(function = "rules::validate_alphabetic"))]
    pub nickname: Option<String>,
    /// Address the account will be registered under.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Declared field order of [`SignupBody`], used when reporting failures.
pub const SIGNUP_FIELDS: &[&str] = &["nickname", "email", "password"];

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Identity echoed back once a signin payload clears validation.
pub struct SigninAck {
    pub email: String,
}

impl From<SigninBody> for SigninAck {
    fn from(body: SigninBody) -> Self {
        SigninAck { email: body.email }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
/// Identity echoed back once a signup payload clears validation.
pub struct SignupAck {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
}

impl From<SignupBody> for SignupAck {
    fn from(body: SignupBody) -> Self {
        SignupAck {
            email: body.email,
            nickname: body.nickname,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signin_body_accepts_wellformed_credentials() {
        let body = SigninBody {
            email: "test@test.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(body.validate().is_ok());
    }

    #[test]
    fn signin_body_rejects_malformed_email() {
        let body = SigninBody {
            email: "wrong-email".to_string(),
            password: "secret".to_string(),
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn signin_body_rejects_empty_password() {
        let body = SigninBody {
            email: "test@test.com".to_string(),
            password: String::new(),
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn signup_body_nickname_is_optional() {
        let body = SignupBody {
            nickname: None,
            email: "test@test.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(body.validate().is_ok());
    }

    #[test]
    fn signup_body_rejects_non_alphabetic_nickname() {
        let body = SignupBody {
            nickname: Some("John1".to_string()),
            email: "test@test.com".to_string(),
            password: "secret".to_string(),
        };
        assert!(body.validate().is_err());
    }

    #[test]
    fn signup_ack_omits_absent_nickname() {
        let ack = SignupAck {
            email: "test@test.com".to_string(),
            nickname: None,
        };
        let json = serde_json::to_value(&ack).unwrap();
        assert!(json.get("nickname").is_none());
        assert_eq!(json["email"], "test@test.com");
    }
}
