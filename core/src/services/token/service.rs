//! Stateless JWT issuance and verification.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::domain::entities::token::{Claims, TokenKind, TokenPair};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service minting and verifying access/refresh token pairs
///
/// Holds no repository: token state lives entirely in the signature. The
/// session lifecycle controller pairs `verify` with the stored session record
/// to get revocation on top of stateless signing.
pub struct TokenService {
    config: TokenServiceConfig,
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    validation: Validation,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Key material is deliberately omitted so secrets cannot leak via Debug.
        f.debug_struct("TokenService")
            .field("config", &self.config)
            .field("validation", &self.validation)
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Creates a new token service
    ///
    /// # Returns
    ///
    /// An error only when a signing secret is absent. That is a fatal
    /// configuration problem surfaced at startup, never a request-time error.
    pub fn new(config: TokenServiceConfig) -> Result<Self, DomainError> {
        if config.access_secret.is_empty() || config.refresh_secret.is_empty() {
            return Err(DomainError::Token(TokenError::MissingSigningKey));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&config.issuer]);
        validation.set_audience(&[&config.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        Ok(Self {
            access_encoding: EncodingKey::from_secret(config.access_secret.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_secret.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_secret.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_secret.as_bytes()),
            validation,
            config,
        })
    }

    /// Issues an access token carrying the identity claims
    pub fn issue_access_token(&self, user: &User) -> DomainResult<String> {
        let claims = Claims::new_access_token(
            user.id,
            user.email.clone(),
            user.username.clone(),
            self.config.access_token_expiry_seconds,
            &self.config.issuer,
            &self.config.audience,
        );
        self.encode_jwt(&claims, &self.access_encoding)
    }

    /// Issues a refresh token carrying the identity id only
    ///
    /// Mutable profile fields are deliberately excluded so rotation never has
    /// to re-derive unrelated state.
    pub fn issue_refresh_token(&self, user_id: Uuid) -> DomainResult<String> {
        let claims = Claims::new_refresh_token(
            user_id,
            self.config.refresh_token_expiry_seconds,
            &self.config.issuer,
            &self.config.audience,
        );
        self.encode_jwt(&claims, &self.refresh_encoding)
    }

    /// Issues a fresh access+refresh pair for a user
    pub fn issue_pair(&self, user: &User) -> DomainResult<TokenPair> {
        let access_token = self.issue_access_token(user)?;
        let refresh_token = self.issue_refresh_token(user.id)?;
        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_expiry_seconds,
            self.config.refresh_token_expiry_seconds,
        ))
    }

    /// Verifies a token of the expected kind and returns its claims
    ///
    /// Every failure mode (bad signature, malformed token, expired, wrong
    /// kind) collapses into `TokenError::InvalidToken`, so callers cannot
    /// tell an expired token from a forged one.
    pub fn verify(&self, token: &str, kind: TokenKind) -> DomainResult<Claims> {
        let decoding_key = match kind {
            TokenKind::Access => &self.access_decoding,
            TokenKind::Refresh => &self.refresh_decoding,
        };

        decode::<Claims>(token, decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))
    }

    /// SHA-256 hex digest of a token, the form stored in the session record
    pub fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Configured refresh token lifetime in seconds
    pub fn refresh_expiry_seconds(&self) -> i64 {
        self.config.refresh_token_expiry_seconds
    }

    /// Configured access token lifetime in seconds
    pub fn access_expiry_seconds(&self) -> i64 {
        self.config.access_token_expiry_seconds
    }

    fn encode_jwt(&self, claims: &Claims, key: &EncodingKey) -> DomainResult<String> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "alice".to_string(),
            "alice@x.com".to_string(),
            "$2b$10$hash".to_string(),
            "https://media.test/a.png".to_string(),
            None,
            None,
        )
    }

    fn service() -> TokenService {
        TokenService::new(TokenServiceConfig::default()).unwrap()
    }

    #[test]
    fn test_missing_secret_is_fatal() {
        let config = TokenServiceConfig {
            access_secret: String::new(),
            ..Default::default()
        };
        let err = TokenService::new(config).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::MissingSigningKey)));
    }

    #[test]
    fn test_access_token_round_trip() {
        let service = service();
        let user = sample_user();

        let token = service.issue_access_token(&user).unwrap();
        let claims = service.verify(&token, TokenKind::Access).unwrap();

        assert_eq!(claims.user_id().unwrap(), user.id);
        assert_eq!(claims.email.as_deref(), Some("alice@x.com"));
        assert_eq!(claims.username.as_deref(), Some("alice"));
    }

    #[test]
    fn test_refresh_token_minimal_claims() {
        let service = service();
        let user = sample_user();

        let token = service.issue_refresh_token(user.id).unwrap();
        let claims = service.verify(&token, TokenKind::Refresh).unwrap();

        assert_eq!(claims.user_id().unwrap(), user.id);
        assert!(claims.email.is_none());
        assert!(claims.username.is_none());
    }

    #[test]
    fn test_kinds_do_not_cross_verify() {
        let service = service();
        let user = sample_user();

        let access = service.issue_access_token(&user).unwrap();
        let refresh = service.issue_refresh_token(user.id).unwrap();

        let err = service.verify(&access, TokenKind::Refresh).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
        let err = service.verify(&refresh, TokenKind::Access).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
    }

    #[test]
    fn test_foreign_key_rejected() {
        let service = service();
        let other = TokenService::new(TokenServiceConfig {
            access_secret: "other-access".to_string(),
            refresh_secret: "other-refresh".to_string(),
            ..Default::default()
        })
        .unwrap();

        let token = other.issue_refresh_token(Uuid::new_v4()).unwrap();
        let err = service.verify(&token, TokenKind::Refresh).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
    }

    #[test]
    fn test_expired_token_rejected() {
        // Negative TTL puts the expiry far past the verifier's leeway.
        let service = TokenService::new(TokenServiceConfig {
            refresh_token_expiry_seconds: -3600,
            ..Default::default()
        })
        .unwrap();

        let token = service.issue_refresh_token(Uuid::new_v4()).unwrap();
        let err = service.verify(&token, TokenKind::Refresh).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
    }

    #[test]
    fn test_garbage_rejected() {
        let service = service();
        let err = service.verify("not.a.jwt", TokenKind::Access).unwrap_err();
        assert!(matches!(err, DomainError::Token(TokenError::InvalidToken)));
    }

    #[test]
    fn test_hash_token_is_stable_hex() {
        let a = TokenService::hash_token("some-token");
        let b = TokenService::hash_token("some-token");
        let c = TokenService::hash_token("other-token");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
