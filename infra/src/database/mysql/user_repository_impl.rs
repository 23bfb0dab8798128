//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vs_core::domain::entities::user::User;
use vs_core::errors::DomainError;
use vs_core::repositories::UserRepository;

use super::is_duplicate_entry;

const USER_COLUMNS: &str = "id, username, email, password_hash, full_name, avatar_url, \
     cover_image_url, watch_history, created_at, updated_at";

/// MySQL implementation of UserRepository
///
/// Uniqueness of username and email is enforced by unique indexes; the watch
/// history is stored as a JSON array of video IDs.
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let watch_history: String = row
            .try_get("watch_history")
            .map_err(|e| DomainError::internal(format!("Failed to get watch_history: {}", e)))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            username: row
                .try_get("username")
                .map_err(|e| DomainError::internal(format!("Failed to get username: {}", e)))?,
            email: row
                .try_get("email")
                .map_err(|e| DomainError::internal(format!("Failed to get email: {}", e)))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(|e| DomainError::internal(format!("Failed to get password_hash: {}", e)))?,
            full_name: row
                .try_get("full_name")
                .map_err(|e| DomainError::internal(format!("Failed to get full_name: {}", e)))?,
            avatar_url: row
                .try_get("avatar_url")
                .map_err(|e| DomainError::internal(format!("Failed to get avatar_url: {}", e)))?,
            cover_image_url: row.try_get("cover_image_url").map_err(|e| {
                DomainError::internal(format!("Failed to get cover_image_url: {}", e))
            })?,
            watch_history: serde_json::from_str(&watch_history)
                .map_err(|e| DomainError::internal(format!("Invalid watch_history: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    fn encode_watch_history(user: &User) -> Result<String, DomainError> {
        serde_json::to_string(&user.watch_history)
            .map_err(|e| DomainError::internal(format!("Failed to encode watch_history: {}", e)))
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE id = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find user by id: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE username = ? LIMIT 1",
            USER_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find user by username: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {} FROM users WHERE email = ? LIMIT 1", USER_COLUMNS);

        let result = sqlx::query(&query)
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find user by email: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<bool, DomainError> {
        let query =
            "SELECT EXISTS(SELECT 1 FROM users WHERE username = ? OR email = ?) AS present";

        let row = sqlx::query(query)
            .bind(username)
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to check user existence: {}", e)))?;

        let present: i8 = row
            .try_get("present")
            .map_err(|e| DomainError::internal(format!("Failed to get existence result: {}", e)))?;
        Ok(present == 1)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (
                id, username, email, password_hash, full_name, avatar_url,
                cover_image_url, watch_history, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.full_name)
            .bind(&user.avatar_url)
            .bind(&user.cover_image_url)
            .bind(Self::encode_watch_history(&user)?)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate_entry(&e) {
                    DomainError::conflict("User already exists")
                } else {
                    DomainError::internal(format!("Failed to create user: {}", e))
                }
            })?;

        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            UPDATE users
            SET username = ?, email = ?, password_hash = ?, full_name = ?,
                avatar_url = ?, cover_image_url = ?, watch_history = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&user.full_name)
            .bind(&user.avatar_url)
            .bind(&user.cover_image_url)
            .bind(Self::encode_watch_history(&user)?)
            .bind(user.updated_at)
            .bind(user.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate_entry(&e) {
                    DomainError::conflict("User already exists")
                } else {
                    DomainError::internal(format!("Failed to update user: {}", e))
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("User"));
        }
        Ok(user)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, limit: u32, offset: u64) -> Result<Vec<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users ORDER BY created_at DESC LIMIT ? OFFSET ?",
            USER_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to list users: {}", e)))?;

        rows.iter().map(Self::row_to_user).collect()
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to count users: {}", e)))?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| DomainError::internal(format!("Failed to get count: {}", e)))?;
        Ok(total as u64)
    }
}
