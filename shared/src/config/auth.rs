//! Authentication configuration

use serde::{Deserialize, Serialize};

/// JWT signing configuration
///
/// Access and refresh tokens are signed with separate secrets so that a token
/// of one kind can never verify as the other.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret for signing access tokens
    pub access_secret: String,

    /// Secret for signing refresh tokens
    pub refresh_secret: String,

    /// Access token expiry in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry in seconds
    pub refresh_token_expiry: i64,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: String::from("dev-access-secret-change-in-production"),
            refresh_secret: String::from("dev-refresh-secret-change-in-production"),
            access_token_expiry: 900,      // 15 minutes
            refresh_token_expiry: 604_800, // 7 days
            issuer: String::from("vidstream"),
            audience: String::from("vidstream-api"),
        }
    }
}

impl JwtConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_secret: std::env::var("ACCESS_TOKEN_SECRET").unwrap_or(defaults.access_secret),
            refresh_secret: std::env::var("REFRESH_TOKEN_SECRET")
                .unwrap_or(defaults.refresh_secret),
            access_token_expiry: std::env::var("ACCESS_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_expiry),
            refresh_token_expiry: std::env::var("REFRESH_TOKEN_EXPIRY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_expiry),
            issuer: defaults.issuer,
            audience: defaults.audience,
        }
    }

    /// Set access token expiry in minutes
    pub fn with_access_expiry_minutes(mut self, minutes: i64) -> Self {
        self.access_token_expiry = minutes * 60;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86_400;
        self
    }

    /// Check if either secret is still a development default
    pub fn is_using_default_secret(&self) -> bool {
        self.access_secret.starts_with("dev-") || self.refresh_secret.starts_with("dev-")
    }
}

/// Credential cookie configuration
///
/// Tokens travel to browsers in HttpOnly cookies so scripts cannot read them.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CookieConfig {
    /// Cookie name carrying the access token
    pub access_cookie_name: String,

    /// Cookie name carrying the refresh token
    pub refresh_cookie_name: String,

    /// Secure flag (HTTPS only)
    pub secure: bool,

    /// SameSite attribute
    pub same_site: String,
}

impl Default for CookieConfig {
    fn default() -> Self {
        Self {
            access_cookie_name: String::from("access_token"),
            refresh_cookie_name: String::from("refresh_token"),
            secure: false, // set true in production
            same_site: String::from("Lax"),
        }
    }
}

impl CookieConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secure: std::env::var("COOKIE_SECURE")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(defaults.secure),
            ..defaults
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    pub jwt: JwtConfig,
    pub cookie: CookieConfig,
}

impl AuthConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
            cookie: CookieConfig::from_env(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_expiry, 900);
        assert_eq!(config.refresh_token_expiry, 604_800);
        assert!(config.is_using_default_secret());
        assert_ne!(config.access_secret, config.refresh_secret);
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::default()
            .with_access_expiry_minutes(30)
            .with_refresh_expiry_days(14);

        assert_eq!(config.access_token_expiry, 1800);
        assert_eq!(config.refresh_token_expiry, 1_209_600);
    }

    #[test]
    fn test_cookie_config_default() {
        let config = CookieConfig::default();
        assert_eq!(config.access_cookie_name, "access_token");
        assert_eq!(config.same_site, "Lax");
        assert!(!config.secure);
    }
}
