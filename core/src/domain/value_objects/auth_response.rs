//! Authentication response value object.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::UserProfile;

/// Result of a successful login or refresh: the token pair plus the
/// sanitized profile of the authenticated user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub expires_in: i64,

    /// Sanitized user profile
    pub user: UserProfile,
}

impl AuthResponse {
    /// Builds the response from a freshly issued pair
    pub fn new(tokens: TokenPair, user: UserProfile) -> Self {
        Self {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in: tokens.access_expires_in,
            user,
        }
    }
}
