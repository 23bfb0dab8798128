//! Credential store: identity persistence and password verification.
//!
//! Passwords are one-way hashed with bcrypt the moment they enter this
//! service; nothing downstream ever sees or stores the clear text. Callers
//! outside the session lifecycle receive sanitized [`UserProfile`] values
//! only.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::user::{User, UserProfile};
use crate::domain::value_objects::NewUser;
use crate::errors::{AuthError, DomainError, DomainResult, ValidationError};
use crate::repositories::UserRepository;
use vs_shared::utils::validation::{
    is_blank, is_valid_email, is_valid_username, normalize_identifier, USERNAME_MAX_LEN,
    USERNAME_MIN_LEN,
};

/// bcrypt cost factor for password hashing
pub const BCRYPT_COST: u32 = 10;

/// Service wrapping the user repository with hashing and normalization
pub struct CredentialService<U: UserRepository> {
    users: Arc<U>,
}

impl<U: UserRepository> CredentialService<U> {
    /// Create a new credential service
    pub fn new(users: Arc<U>) -> Self {
        Self { users }
    }

    /// Register a new identity
    ///
    /// Validates and normalizes the input, rejects duplicate usernames or
    /// emails, hashes the password, and persists the user.
    ///
    /// # Returns
    /// * `Ok(UserProfile)` - The sanitized profile of the created user
    /// * `Err(DomainError)` - Validation failure or uniqueness conflict
    pub async fn register(&self, new_user: NewUser) -> DomainResult<UserProfile> {
        if is_blank(&new_user.username) {
            return Err(ValidationError::RequiredField {
                field: "username".to_string(),
            }
            .into());
        }
        if !is_valid_username(&new_user.username) {
            return Err(ValidationError::InvalidLength {
                field: "username".to_string(),
                min: USERNAME_MIN_LEN,
                max: USERNAME_MAX_LEN,
            }
            .into());
        }
        if is_blank(&new_user.email) {
            return Err(ValidationError::RequiredField {
                field: "email".to_string(),
            }
            .into());
        }
        if !is_valid_email(&new_user.email) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if is_blank(&new_user.password) {
            return Err(ValidationError::RequiredField {
                field: "password".to_string(),
            }
            .into());
        }
        if is_blank(&new_user.avatar_url) {
            return Err(ValidationError::RequiredField {
                field: "avatar".to_string(),
            }
            .into());
        }

        let username = normalize_identifier(&new_user.username);
        let email = normalize_identifier(&new_user.email);

        if self
            .users
            .exists_by_username_or_email(&username, &email)
            .await?
        {
            return Err(AuthError::UserAlreadyExists.into());
        }

        let password_hash = self.hash_password(&new_user.password)?;
        let user = User::new(
            username,
            email,
            password_hash,
            new_user.avatar_url,
            new_user.full_name.filter(|n| !is_blank(n)),
            new_user.cover_image_url.filter(|c| !is_blank(c)),
        );

        let created = self.users.create(user).await?;
        tracing::info!(user_id = %created.id, "registered new user");
        Ok(created.into())
    }

    /// Hash a password with the fixed cost factor
    pub fn hash_password(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, BCRYPT_COST)
            .map_err(|e| DomainError::internal(format!("Password hashing failed: {}", e)))
    }

    /// Compare a candidate password against the stored hash
    ///
    /// Never decrypts; bcrypt's comparator does the work.
    pub fn verify_password(&self, user: &User, candidate: &str) -> DomainResult<bool> {
        bcrypt::verify(candidate, &user.password_hash)
            .map_err(|e| DomainError::internal(format!("Password verification failed: {}", e)))
    }

    /// Find a user by username (input is normalized first)
    pub async fn find_by_username(&self, username: &str) -> DomainResult<Option<User>> {
        self.users
            .find_by_username(&normalize_identifier(username))
            .await
    }

    /// Find a user by email (input is normalized first)
    pub async fn find_by_email(&self, email: &str) -> DomainResult<Option<User>> {
        self.users.find_by_email(&normalize_identifier(email)).await
    }

    /// Find a user by ID
    pub async fn find_by_id(&self, id: Uuid) -> DomainResult<Option<User>> {
        self.users.find_by_id(id).await
    }

    /// Persist changes to a user
    pub async fn update(&self, user: User) -> DomainResult<User> {
        self.users.update(user).await
    }

    /// Sanitized profile for a user ID
    pub async fn profile(&self, id: Uuid) -> DomainResult<UserProfile> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(AuthError::UserNotFound)?;
        Ok(user.into())
    }

    /// Update account fields (display name and/or email); the password and
    /// session are never touched here
    pub async fn update_account(
        &self,
        id: Uuid,
        full_name: Option<String>,
        email: Option<String>,
    ) -> DomainResult<UserProfile> {
        let mut user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let email = match email.filter(|e| !is_blank(e)) {
            Some(raw) => {
                if !is_valid_email(&raw) {
                    return Err(ValidationError::InvalidEmail.into());
                }
                let normalized = normalize_identifier(&raw);
                if normalized != user.email {
                    if let Some(existing) = self.users.find_by_email(&normalized).await? {
                        if existing.id != user.id {
                            return Err(AuthError::UserAlreadyExists.into());
                        }
                    }
                }
                Some(normalized)
            }
            None => None,
        };

        user.update_profile(full_name.filter(|n| !is_blank(n)), email);
        let updated = self.users.update(user).await?;
        Ok(updated.into())
    }

    /// Sanitized profiles for the user listing endpoint
    pub async fn list_profiles(&self, limit: u32, offset: u64) -> DomainResult<Vec<UserProfile>> {
        let users = self.users.list(limit, offset).await?;
        Ok(users.into_iter().map(UserProfile::from).collect())
    }

    /// Delete an account
    pub async fn remove(&self, id: Uuid) -> DomainResult<()> {
        if !self.users.delete(id).await? {
            return Err(AuthError::UserNotFound.into());
        }
        tracing::info!(user_id = %id, "deleted user account");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user::MockUserRepository;

    fn service() -> CredentialService<MockUserRepository> {
        CredentialService::new(Arc::new(MockUserRepository::new()))
    }

    fn new_user(username: &str, email: &str, password: &str) -> NewUser {
        NewUser {
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
            full_name: None,
            avatar_url: "https://media.test/avatar.png".to_string(),
            cover_image_url: None,
        }
    }

    #[tokio::test]
    async fn test_register_never_stores_plaintext() {
        let service = service();
        let profile = service
            .register(new_user("alice", "alice@x.com", "secret123"))
            .await
            .unwrap();

        let stored = service.find_by_id(profile.id).await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "secret123");
        assert!(stored.password_hash.starts_with("$2"));
        assert!(service.verify_password(&stored, "secret123").unwrap());
        assert!(!service.verify_password(&stored, "secret124").unwrap());
    }

    #[tokio::test]
    async fn test_register_normalizes_username_and_email() {
        let service = service();
        let profile = service
            .register(new_user("  Alice ", "Alice@X.COM", "secret123"))
            .await
            .unwrap();

        assert_eq!(profile.username, "alice");
        assert_eq!(profile.email, "alice@x.com");

        // Lookup with unnormalized input still resolves
        let found = service.find_by_username(" ALICE ").await.unwrap();
        assert!(found.is_some());
    }

    #[tokio::test]
    async fn test_register_rejects_duplicates() {
        let service = service();
        service
            .register(new_user("alice", "alice@x.com", "secret123"))
            .await
            .unwrap();

        let err = service
            .register(new_user("ALICE", "other@x.com", "secret123"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::UserAlreadyExists)));

        let err = service
            .register(new_user("someone", "alice@x.com", "secret123"))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::UserAlreadyExists)));
    }

    #[tokio::test]
    async fn test_register_validates_fields() {
        let service = service();

        let err = service
            .register(new_user("bob", "bob@x.com", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::InvalidLength { .. })
        ));

        let err = service
            .register(new_user("bobby", "not-an-email", "pw"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::InvalidEmail)
        ));

        let mut missing_avatar = new_user("bobby", "bob@x.com", "pw");
        missing_avatar.avatar_url = String::new();
        let err = service.register(missing_avatar).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::RequiredField { .. })
        ));
    }

    #[tokio::test]
    async fn test_update_account_email_uniqueness() {
        let service = service();
        service
            .register(new_user("alice", "alice@x.com", "secret123"))
            .await
            .unwrap();
        let bob = service
            .register(new_user("bobby", "bob@x.com", "secret123"))
            .await
            .unwrap();

        let err = service
            .update_account(bob.id, None, Some("alice@x.com".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Auth(AuthError::UserAlreadyExists)));

        let updated = service
            .update_account(bob.id, Some("Bob B".to_string()), None)
            .await
            .unwrap();
        assert_eq!(updated.full_name.as_deref(), Some("Bob B"));
        assert_eq!(updated.email, "bob@x.com");
    }
}
