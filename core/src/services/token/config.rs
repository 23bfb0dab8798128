//! Configuration for the token service

use vs_shared::config::JwtConfig;

/// Configuration for the token service
///
/// Access and refresh tokens use separate signing secrets, so a refresh token
/// can never pass verification as an access token or vice versa.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for signing access tokens
    pub access_secret: String,
    /// Secret for signing refresh tokens
    pub refresh_secret: String,
    /// Access token expiry in seconds
    pub access_token_expiry_seconds: i64,
    /// Refresh token expiry in seconds
    pub refresh_token_expiry_seconds: i64,
    /// JWT issuer claim
    pub issuer: String,
    /// JWT audience claim
    pub audience: String,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_secret: "dev-access-secret-change-in-production".to_string(),
            refresh_secret: "dev-refresh-secret-change-in-production".to_string(),
            access_token_expiry_seconds: 900,
            refresh_token_expiry_seconds: 604_800,
            issuer: "vidstream".to_string(),
            audience: "vidstream-api".to_string(),
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            access_secret: config.access_secret,
            refresh_secret: config.refresh_secret,
            access_token_expiry_seconds: config.access_token_expiry,
            refresh_token_expiry_seconds: config.refresh_token_expiry,
            issuer: config.issuer,
            audience: config.audience,
        }
    }
}
