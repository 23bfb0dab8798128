//! MySQL implementation of the SessionRepository trait.
//!
//! The `sessions` table holds at most one row per user (user_id is the
//! primary key); upserting on login is what makes the single-session policy
//! hold, and rotation is a conditional UPDATE so the read-check-write of a
//! refresh cannot race another rotation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vs_core::domain::entities::session::SessionRecord;
use vs_core::errors::DomainError;
use vs_core::repositories::SessionRepository;

/// MySQL implementation of SessionRepository
pub struct MySqlSessionRepository {
    pool: MySqlPool,
}

impl MySqlSessionRepository {
    /// Create a new MySQL session repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<SessionRecord, DomainError> {
        let user_id: String = row
            .try_get("user_id")
            .map_err(|e| DomainError::internal(format!("Failed to get user_id: {}", e)))?;

        Ok(SessionRecord {
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::internal(format!("Invalid user UUID: {}", e)))?,
            token_hash: row
                .try_get("token_hash")
                .map_err(|e| DomainError::internal(format!("Failed to get token_hash: {}", e)))?,
            issued_at: row
                .try_get::<DateTime<Utc>, _>("issued_at")
                .map_err(|e| DomainError::internal(format!("Failed to get issued_at: {}", e)))?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::internal(format!("Failed to get expires_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl SessionRepository for MySqlSessionRepository {
    async fn upsert(&self, record: SessionRecord) -> Result<SessionRecord, DomainError> {
        let query = r#"
            INSERT INTO sessions (user_id, token_hash, issued_at, expires_at)
            VALUES (?, ?, ?, ?)
            ON DUPLICATE KEY UPDATE
                token_hash = VALUES(token_hash),
                issued_at = VALUES(issued_at),
                expires_at = VALUES(expires_at)
        "#;

        sqlx::query(query)
            .bind(record.user_id.to_string())
            .bind(&record.token_hash)
            .bind(record.issued_at)
            .bind(record.expires_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to upsert session: {}", e)))?;

        Ok(record)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<SessionRecord>, DomainError> {
        let query = r#"
            SELECT user_id, token_hash, issued_at, expires_at
            FROM sessions
            WHERE user_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find session: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn rotate(
        &self,
        user_id: Uuid,
        expected_hash: &str,
        replacement: SessionRecord,
    ) -> Result<bool, DomainError> {
        // The WHERE clause is the compare half of the compare-and-swap: the
        // row is only overwritten if it still holds the presented token.
        let query = r#"
            UPDATE sessions
            SET token_hash = ?, issued_at = ?, expires_at = ?
            WHERE user_id = ? AND token_hash = ?
        "#;

        let result = sqlx::query(query)
            .bind(&replacement.token_hash)
            .bind(replacement.issued_at)
            .bind(replacement.expires_at)
            .bind(user_id.to_string())
            .bind(expected_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to rotate session: {}", e)))?;

        Ok(result.rows_affected() == 1)
    }

    async fn delete(&self, user_id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ?")
            .bind(user_id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete session: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
