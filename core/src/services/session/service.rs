//! Session lifecycle controller.
//!
//! Orchestrates the credential store, token issuer and session record into
//! the Anonymous → Authenticated → Revoked state machine. One session slot
//! exists per user: issuing a new refresh token overwrites the previous one,
//! and rotation is a compare-and-swap so concurrent refreshes cannot both
//! win.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::session::SessionRecord;
use crate::domain::entities::token::TokenKind;
use crate::domain::entities::user::UserProfile;
use crate::domain::value_objects::{AuthResponse, NewUser};
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::{SessionRepository, UserRepository};
use crate::services::credential::CredentialService;
use crate::services::token::TokenService;
use vs_shared::utils::validation::is_blank;

/// Service managing the complete authentication session lifecycle
pub struct SessionService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    /// Credential store for identity lookup and password checks
    credentials: CredentialService<U>,
    /// Session record persistence
    sessions: Arc<S>,
    /// Token issuer
    tokens: Arc<TokenService>,
}

impl<U, S> SessionService<U, S>
where
    U: UserRepository,
    S: SessionRepository,
{
    /// Create a new session service
    pub fn new(
        credentials: CredentialService<U>,
        sessions: Arc<S>,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            credentials,
            sessions,
            tokens,
        }
    }

    /// The underlying credential store, for handlers that need profile
    /// lookups or account updates
    pub fn credentials(&self) -> &CredentialService<U> {
        &self.credentials
    }

    /// Register a new identity (Anonymous state, no session is created)
    pub async fn register(&self, new_user: NewUser) -> DomainResult<UserProfile> {
        self.credentials.register(new_user).await
    }

    /// Login: Anonymous → Authenticated
    ///
    /// # Errors
    /// * `NotFound` - No identity with this username
    /// * `Unauthorized` - Password verification failed
    pub async fn login(&self, username: &str, password: &str) -> DomainResult<AuthResponse> {
        if is_blank(username) {
            return Err(ValidationError::RequiredField {
                field: "username".to_string(),
            }
            .into());
        }
        if is_blank(password) {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            }
            .into());
        }

        let user = self
            .credentials
            .find_by_username(username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self.credentials.verify_password(&user, password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let pair = self.tokens.issue_pair(&user)?;

        // Overwrite any prior session: the implicit single-session policy.
        let record = SessionRecord::new(
            user.id,
            TokenService::hash_token(&pair.refresh_token),
            self.tokens.refresh_expiry_seconds(),
        );
        self.sessions.upsert(record).await?;

        tracing::info!(user_id = %user.id, "user logged in");
        let profile = UserProfile::from(&user);
        Ok(AuthResponse::new(pair, profile))
    }

    /// Refresh: Authenticated → Authenticated, rotating both tokens
    ///
    /// The presented token must pass signature+expiry verification AND match
    /// the stored session record exactly; the second check is what makes
    /// revocation and rotation possible despite stateless signing. Every
    /// failure surfaces as `Unauthorized` with no further detail.
    pub async fn refresh(&self, presented: Option<&str>) -> DomainResult<AuthResponse> {
        let token = presented
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or(DomainError::Unauthorized)?;

        let claims = self
            .tokens
            .verify(token, TokenKind::Refresh)
            .map_err(|_| DomainError::Unauthorized)?;
        let user_id = claims.user_id().map_err(|_| DomainError::Unauthorized)?;

        let user = self
            .credentials
            .find_by_id(user_id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        let record = self
            .sessions
            .find_by_user(user_id)
            .await?
            .ok_or(DomainError::Unauthorized)?;

        let presented_hash = TokenService::hash_token(token);
        if !record.matches(&presented_hash) {
            // A validly signed token that is no longer the stored one: it was
            // rotated out or the session was revoked. Reuse is rejected, not
            // escalated.
            tracing::warn!(user_id = %user_id, "stale refresh token presented");
            return Err(DomainError::Unauthorized);
        }

        let pair = self.tokens.issue_pair(&user)?;
        let replacement = SessionRecord::new(
            user_id,
            TokenService::hash_token(&pair.refresh_token),
            self.tokens.refresh_expiry_seconds(),
        );

        // Compare-and-swap: only overwrite if the slot still holds the
        // presented token. The loser of a concurrent rotation gets a clean
        // Unauthorized instead of silently clobbering the winner's session.
        let swapped = self
            .sessions
            .rotate(user_id, &presented_hash, replacement)
            .await?;
        if !swapped {
            return Err(DomainError::Unauthorized);
        }

        let profile = UserProfile::from(&user);
        Ok(AuthResponse::new(pair, profile))
    }

    /// Logout: Authenticated → Revoked
    ///
    /// Clears the session record; the caller is responsible for instructing
    /// the client to discard both cookies.
    pub async fn logout(&self, user_id: Uuid) -> DomainResult<()> {
        self.sessions.delete(user_id).await?;
        tracing::info!(user_id = %user_id, "user logged out");
        Ok(())
    }

    /// Change password (Authenticated, no state transition)
    ///
    /// The active session's refresh token deliberately stays valid; see the
    /// policy notes in DESIGN.md.
    ///
    /// # Errors
    /// * `BadRequest` - New password and confirmation differ, or blank input
    /// * `Unauthorized` - Old password does not verify
    pub async fn change_password(
        &self,
        user_id: Uuid,
        old_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> DomainResult<()> {
        if new_password != confirm_password {
            return Err(AuthError::PasswordConfirmationMismatch.into());
        }
        if is_blank(new_password) {
            return Err(ValidationError::RequiredField {
                field: "new_password".to_string(),
            }
            .into());
        }

        let mut user = self
            .credentials
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self.credentials.verify_password(&user, old_password)? {
            return Err(AuthError::InvalidCredentials.into());
        }

        let password_hash = self.credentials.hash_password(new_password)?;
        user.set_password_hash(password_hash);
        self.credentials.update(user).await?;

        tracing::info!(user_id = %user_id, "password changed");
        Ok(())
    }

    /// Sanitized profile of the authenticated user
    pub async fn current_user(&self, user_id: Uuid) -> DomainResult<UserProfile> {
        self.credentials.profile(user_id).await
    }
}
