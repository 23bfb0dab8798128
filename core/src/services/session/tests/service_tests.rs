//! Unit tests for the session lifecycle service

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::token::TokenKind;
use crate::domain::value_objects::NewUser;
use crate::errors::{AuthError, DomainError};
use crate::repositories::session::MockSessionRepository;
use crate::repositories::user::MockUserRepository;
use crate::services::credential::CredentialService;
use crate::services::session::SessionService;
use crate::services::token::{TokenService, TokenServiceConfig};

type TestSessionService = SessionService<MockUserRepository, MockSessionRepository>;

fn build_service() -> (TestSessionService, Arc<TokenService>) {
    let users = Arc::new(MockUserRepository::new());
    let sessions = Arc::new(MockSessionRepository::new());
    let tokens = Arc::new(TokenService::new(TokenServiceConfig::default()).unwrap());

    let service = SessionService::new(
        CredentialService::new(users),
        sessions,
        Arc::clone(&tokens),
    );
    (service, tokens)
}

fn alice() -> NewUser {
    NewUser {
        username: "alice".to_string(),
        email: "alice@x.com".to_string(),
        password: "secret123".to_string(),
        full_name: Some("Alice".to_string()),
        avatar_url: "https://media.test/alice.png".to_string(),
        cover_image_url: None,
    }
}

#[tokio::test]
async fn test_login_returns_verifiable_tokens() {
    let (service, tokens) = build_service();
    let profile = service.register(alice()).await.unwrap();

    let auth = service.login("alice", "secret123").await.unwrap();
    assert!(!auth.access_token.is_empty());
    assert!(!auth.refresh_token.is_empty());
    assert_eq!(auth.user.id, profile.id);

    let claims = tokens.verify(&auth.access_token, TokenKind::Access).unwrap();
    assert_eq!(claims.user_id().unwrap(), profile.id);
    assert_eq!(claims.username.as_deref(), Some("alice"));
}

#[tokio::test]
async fn test_login_unknown_username_is_not_found() {
    let (service, _) = build_service();

    let err = service.login("nobody", "secret123").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
}

#[tokio::test]
async fn test_login_wrong_password_is_unauthorized() {
    let (service, _) = build_service();
    service.register(alice()).await.unwrap();

    let err = service.login("alice", "wrong-password").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn test_login_accepts_unnormalized_username() {
    let (service, _) = build_service();
    service.register(alice()).await.unwrap();

    let auth = service.login("  ALICE ", "secret123").await.unwrap();
    assert_eq!(auth.user.username, "alice");
}

#[tokio::test]
async fn test_refresh_rotates_both_tokens() {
    let (service, _) = build_service();
    service.register(alice()).await.unwrap();

    let first = service.login("alice", "secret123").await.unwrap();
    let second = service.refresh(Some(&first.refresh_token)).await.unwrap();

    assert_ne!(first.access_token, second.access_token);
    assert_ne!(first.refresh_token, second.refresh_token);

    // The first refresh token was superseded by the rotation and must now
    // be rejected.
    let err = service.refresh(Some(&first.refresh_token)).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));

    // The second one is still live.
    service.refresh(Some(&second.refresh_token)).await.unwrap();
}

#[tokio::test]
async fn test_refresh_without_token_is_unauthorized() {
    let (service, _) = build_service();

    let err = service.refresh(None).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));

    let err = service.refresh(Some("   ")).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));
}

#[tokio::test]
async fn test_refresh_with_tampered_token_is_unauthorized() {
    let (service, _) = build_service();
    service.register(alice()).await.unwrap();
    let auth = service.login("alice", "secret123").await.unwrap();

    // Flip a character in the signature segment.
    let mut tampered = auth.refresh_token.clone();
    let last = tampered.pop().unwrap();
    tampered.push(if last == 'a' { 'b' } else { 'a' });

    let err = service.refresh(Some(&tampered)).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));
}

#[tokio::test]
async fn test_refresh_with_foreign_signed_token_is_unauthorized() {
    let (service, _) = build_service();
    let profile = service.register(alice()).await.unwrap();
    service.login("alice", "secret123").await.unwrap();

    // Same claims shape, signed by a different key.
    let forger = TokenService::new(TokenServiceConfig {
        refresh_secret: "attacker-secret".to_string(),
        ..Default::default()
    })
    .unwrap();
    let forged = forger.issue_refresh_token(profile.id).unwrap();

    let err = service.refresh(Some(&forged)).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));
}

#[tokio::test]
async fn test_refresh_for_unknown_subject_is_unauthorized() {
    let (service, tokens) = build_service();

    let orphan = tokens.issue_refresh_token(Uuid::new_v4()).unwrap();
    let err = service.refresh(Some(&orphan)).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));
}

#[tokio::test]
async fn test_login_supersedes_previous_session() {
    let (service, _) = build_service();
    service.register(alice()).await.unwrap();

    let first = service.login("alice", "secret123").await.unwrap();
    let second = service.login("alice", "secret123").await.unwrap();

    // Logging in again overwrote the single session slot; the older refresh
    // token is dead even though its signature still verifies.
    let err = service.refresh(Some(&first.refresh_token)).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));

    service.refresh(Some(&second.refresh_token)).await.unwrap();
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    let (service, _) = build_service();
    let profile = service.register(alice()).await.unwrap();
    let auth = service.login("alice", "secret123").await.unwrap();

    service.logout(profile.id).await.unwrap();

    let err = service.refresh(Some(&auth.refresh_token)).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));
}

#[tokio::test]
async fn test_logout_is_idempotent() {
    let (service, _) = build_service();
    let profile = service.register(alice()).await.unwrap();
    service.login("alice", "secret123").await.unwrap();

    service.logout(profile.id).await.unwrap();
    service.logout(profile.id).await.unwrap();
}

#[tokio::test]
async fn test_change_password_flow() {
    let (service, _) = build_service();
    let profile = service.register(alice()).await.unwrap();
    service.login("alice", "secret123").await.unwrap();

    service
        .change_password(profile.id, "secret123", "newsecret9", "newsecret9")
        .await
        .unwrap();

    // Old password no longer logs in, the new one does.
    let err = service.login("alice", "secret123").await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
    service.login("alice", "newsecret9").await.unwrap();
}

#[tokio::test]
async fn test_change_password_rejects_mismatched_confirmation() {
    let (service, _) = build_service();
    let profile = service.register(alice()).await.unwrap();

    let err = service
        .change_password(profile.id, "secret123", "newsecret9", "different")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Auth(AuthError::PasswordConfirmationMismatch)
    ));
}

#[tokio::test]
async fn test_change_password_rejects_wrong_old_password() {
    let (service, _) = build_service();
    let profile = service.register(alice()).await.unwrap();

    let err = service
        .change_password(profile.id, "wrong", "newsecret9", "newsecret9")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::InvalidCredentials)));
}

#[tokio::test]
async fn test_password_change_keeps_existing_session() {
    // Documented policy: changing the password does not rotate or revoke the
    // live refresh token.
    let (service, _) = build_service();
    let profile = service.register(alice()).await.unwrap();
    let auth = service.login("alice", "secret123").await.unwrap();

    service
        .change_password(profile.id, "secret123", "newsecret9", "newsecret9")
        .await
        .unwrap();

    service.refresh(Some(&auth.refresh_token)).await.unwrap();
}

#[tokio::test]
async fn test_full_scenario_register_login_refresh_reuse() {
    // register alice/alice@x.com/secret123 → login → refresh → re-use the
    // first refresh token → Unauthorized.
    let (service, _) = build_service();
    service.register(alice()).await.unwrap();

    let login = service.login("alice", "secret123").await.unwrap();
    assert!(!login.access_token.is_empty());
    assert!(!login.refresh_token.is_empty());

    let rotated = service.refresh(Some(&login.refresh_token)).await.unwrap();
    assert_ne!(rotated.access_token, login.access_token);
    assert_ne!(rotated.refresh_token, login.refresh_token);

    let err = service.refresh(Some(&login.refresh_token)).await.unwrap_err();
    assert!(matches!(err, DomainError::Unauthorized));
}

#[tokio::test]
async fn test_current_user_profile() {
    let (service, _) = build_service();
    let profile = service.register(alice()).await.unwrap();

    let current = service.current_user(profile.id).await.unwrap();
    assert_eq!(current.username, "alice");
    assert_eq!(current.full_name.as_deref(), Some("Alice"));

    let err = service.current_user(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::Auth(AuthError::UserNotFound)));
}
