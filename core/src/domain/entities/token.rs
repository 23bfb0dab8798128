//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The two kinds of credential tokens the issuer produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Short-lived token presented on every request
    Access,
    /// Long-lived token used only to mint new pairs
    Refresh,
}

/// Claims structure for the JWT payload
///
/// Access tokens carry the identity fields; refresh tokens carry only the
/// subject so rotation never depends on mutable profile state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,

    /// Email (access tokens only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Username (access tokens only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

impl Claims {
    /// Creates claims for an access token
    pub fn new_access_token(
        user_id: Uuid,
        email: String,
        username: String,
        ttl_seconds: i64,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
            email: Some(email),
            username: Some(username),
        }
    }

    /// Creates claims for a refresh token (subject only)
    pub fn new_refresh_token(user_id: Uuid, ttl_seconds: i64, issuer: &str, audience: &str) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_seconds);

        Self {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            jti: Uuid::new_v4().to_string(),
            email: None,
            username: None,
        }
    }

    /// Checks whether the claims are currently within their validity window
    pub fn is_valid(&self) -> bool {
        let now = Utc::now().timestamp();
        now >= self.nbf && now < self.exp
    }

    /// Parses the subject back into a user ID
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Token pair returned to the client after login or refresh
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// JWT access token
    pub access_token: String,

    /// JWT refresh token
    pub refresh_token: String,

    /// Access token expiry time in seconds
    pub access_expires_in: i64,

    /// Refresh token expiry time in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with its configured lifetimes
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_expires_in: i64,
        refresh_expires_in: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in,
            refresh_expires_in,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_claims() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_access_token(
            user_id,
            "alice@x.com".to_string(),
            "alice".to_string(),
            900,
            "vidstream",
            "vidstream-api",
        );

        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.email.as_deref(), Some("alice@x.com"));
        assert_eq!(claims.username.as_deref(), Some("alice"));
        assert!(claims.is_valid());
        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_refresh_token_claims_carry_subject_only() {
        let user_id = Uuid::new_v4();
        let claims = Claims::new_refresh_token(user_id, 604_800, "vidstream", "vidstream-api");

        assert_eq!(claims.sub, user_id.to_string());
        assert!(claims.email.is_none());
        assert!(claims.username.is_none());

        let json = serde_json::to_value(&claims).unwrap();
        assert!(json.get("email").is_none());
        assert!(json.get("username").is_none());
    }

    #[test]
    fn test_expired_claims_are_invalid() {
        let mut claims =
            Claims::new_refresh_token(Uuid::new_v4(), 60, "vidstream", "vidstream-api");
        claims.exp = Utc::now().timestamp() - 1;
        assert!(!claims.is_valid());
    }

    #[test]
    fn test_jti_is_unique_per_token() {
        let user_id = Uuid::new_v4();
        let a = Claims::new_refresh_token(user_id, 60, "vidstream", "vidstream-api");
        let b = Claims::new_refresh_token(user_id, 60, "vidstream", "vidstream-api");
        assert_ne!(a.jti, b.jti);
    }
}
