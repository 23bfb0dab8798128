//! User entity representing a registered account in the VidStream system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity representing a registered account
///
/// `username` and `email` are stored normalized (trimmed, lowercased); the
/// password hash never leaves this crate in serialized form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Unique, normalized username
    pub username: String,

    /// Unique, normalized email address
    pub email: String,

    /// bcrypt hash of the password, never the clear text
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Optional display name
    pub full_name: Option<String>,

    /// Hosted avatar image URL
    pub avatar_url: String,

    /// Optional hosted cover image URL
    pub cover_image_url: Option<String>,

    /// IDs of videos this user has watched, oldest first
    pub watch_history: Vec<Uuid>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Creates a new User. Inputs are expected to be normalized and the
    /// password already hashed by the credential service.
    pub fn new(
        username: String,
        email: String,
        password_hash: String,
        avatar_url: String,
        full_name: Option<String>,
        cover_image_url: Option<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            full_name,
            avatar_url,
            cover_image_url,
            watch_history: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Updates mutable profile fields
    pub fn update_profile(&mut self, full_name: Option<String>, email: Option<String>) {
        if let Some(name) = full_name {
            self.full_name = Some(name);
        }
        if let Some(email) = email {
            self.email = email;
        }
        self.updated_at = Utc::now();
    }

    /// Replaces the avatar image URL
    pub fn set_avatar(&mut self, avatar_url: String) {
        self.avatar_url = avatar_url;
        self.updated_at = Utc::now();
    }

    /// Replaces the cover image URL
    pub fn set_cover_image(&mut self, cover_image_url: String) {
        self.cover_image_url = Some(cover_image_url);
        self.updated_at = Utc::now();
    }

    /// Appends a video to the watch history
    pub fn record_watch(&mut self, video_id: Uuid) {
        self.watch_history.push(video_id);
        self.updated_at = Utc::now();
    }
}

/// Public view of a user, safe to return to any caller
///
/// Carries neither the password hash nor any session state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
    pub avatar_url: String,
    pub cover_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            full_name: user.full_name.clone(),
            avatar_url: user.avatar_url.clone(),
            cover_image_url: user.cover_image_url.clone(),
            created_at: user.created_at,
        }
    }
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self::from(&user)
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
            "https://media.example/avatar.png".to_string(),
            Some("Alice".to_string()),
            None,
        )
    }

    #[test]
    fn test_new_user() {
        let user = sample_user();
        assert_eq!(user.username, "alice");
        assert_eq!(user.email, "alice@x.com");
        assert!(user.watch_history.is_empty());
        assert!(user.cover_image_url.is_none());
    }

    #[test]
    fn test_profile_excludes_password_hash() {
        let user = sample_user();
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());

        let profile = UserProfile::from(&user);
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }

    #[test]
    fn test_record_watch() {
        let mut user = sample_user();
        let video_id = Uuid::new_v4();
        user.record_watch(video_id);
        assert_eq!(user.watch_history, vec![video_id]);
    }

    #[test]
    fn test_update_profile_partial() {
        let mut user = sample_user();
        user.update_profile(None, Some("alice@new.com".to_string()));
        assert_eq!(user.email, "alice@new.com");
        assert_eq!(user.full_name, Some("Alice".to_string()));
    }
}
