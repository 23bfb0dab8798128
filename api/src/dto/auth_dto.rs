//! Authentication and account DTOs

use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 5, max = 20))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub password: String,
    pub full_name: Option<String>,
    /// Path of the avatar file staged by the upload middleware
    #[validate(length(min = 1))]
    pub avatar_path: String,
    /// Path of the optional cover image staged by the upload middleware
    pub cover_image_path: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ChangePasswordRequest {
    #[validate(length(min = 1))]
    pub old_password: String,
    #[validate(length(min = 1))]
    pub new_password: String,
    #[validate(length(min = 1))]
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateAccountRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let valid = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@x.com".to_string(),
            password: "secret123".to_string(),
            full_name: None,
            avatar_path: "/tmp/staging/avatar.png".to_string(),
            cover_image_path: None,
        };
        assert!(valid.validate().is_ok());

        let short_username = RegisterRequest {
            username: "bob".to_string(),
            ..valid.clone()
        };
        assert!(short_username.validate().is_err());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..valid.clone()
        };
        assert!(bad_email.validate().is_err());

        let missing_avatar = RegisterRequest {
            avatar_path: String::new(),
            ..valid
        };
        assert!(missing_avatar.validate().is_err());
    }

    #[test]
    fn test_login_request_requires_both_fields() {
        let request = LoginRequest {
            username: "alice".to_string(),
            password: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
