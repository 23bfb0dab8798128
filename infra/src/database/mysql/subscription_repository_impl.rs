//! MySQL implementation of the SubscriptionRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vs_core::domain::entities::subscription::Subscription;
use vs_core::errors::DomainError;
use vs_core::repositories::SubscriptionRepository;

use super::is_duplicate_entry;

/// MySQL implementation of SubscriptionRepository
///
/// A unique index over (subscriber_id, channel_id) enforces one edge per
/// pair.
pub struct MySqlSubscriptionRepository {
    pool: MySqlPool,
}

impl MySqlSubscriptionRepository {
    /// Create a new MySQL subscription repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_subscription(row: &sqlx::mysql::MySqlRow) -> Result<Subscription, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let subscriber_id: String = row
            .try_get("subscriber_id")
            .map_err(|e| DomainError::internal(format!("Failed to get subscriber_id: {}", e)))?;
        let channel_id: String = row
            .try_get("channel_id")
            .map_err(|e| DomainError::internal(format!("Failed to get channel_id: {}", e)))?;

        Ok(Subscription {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid subscription UUID: {}", e)))?,
            subscriber_id: Uuid::parse_str(&subscriber_id)
                .map_err(|e| DomainError::internal(format!("Invalid subscriber UUID: {}", e)))?,
            channel_id: Uuid::parse_str(&channel_id)
                .map_err(|e| DomainError::internal(format!("Invalid channel UUID: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl SubscriptionRepository for MySqlSubscriptionRepository {
    async fn create(&self, subscription: Subscription) -> Result<Subscription, DomainError> {
        let query = r#"
            INSERT INTO subscriptions (id, subscriber_id, channel_id, created_at)
            VALUES (?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(subscription.id.to_string())
            .bind(subscription.subscriber_id.to_string())
            .bind(subscription.channel_id.to_string())
            .bind(subscription.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate_entry(&e) {
                    DomainError::conflict("Already subscribed")
                } else {
                    DomainError::internal(format!("Failed to create subscription: {}", e))
                }
            })?;

        Ok(subscription)
    }

    async fn find(
        &self,
        subscriber_id: Uuid,
        channel_id: Uuid,
    ) -> Result<Option<Subscription>, DomainError> {
        let query = r#"
            SELECT id, subscriber_id, channel_id, created_at
            FROM subscriptions
            WHERE subscriber_id = ? AND channel_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(subscriber_id.to_string())
            .bind(channel_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find subscription: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_subscription(&row)?)),
            None => Ok(None),
        }
    }

    async fn delete(&self, subscriber_id: Uuid, channel_id: Uuid) -> Result<bool, DomainError> {
        let result =
            sqlx::query("DELETE FROM subscriptions WHERE subscriber_id = ? AND channel_id = ?")
                .bind(subscriber_id.to_string())
                .bind(channel_id.to_string())
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::internal(format!("Failed to delete subscription: {}", e))
                })?;

        Ok(result.rows_affected() > 0)
    }

    async fn count_for_channel(&self, channel_id: Uuid) -> Result<u64, DomainError> {
        let row = sqlx::query("SELECT COUNT(*) AS total FROM subscriptions WHERE channel_id = ?")
            .bind(channel_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to count subscribers: {}", e)))?;

        let total: i64 = row
            .try_get("total")
            .map_err(|e| DomainError::internal(format!("Failed to get count: {}", e)))?;
        Ok(total as u64)
    }

    async fn list_channels(&self, subscriber_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let rows = sqlx::query(
            "SELECT channel_id FROM subscriptions WHERE subscriber_id = ? ORDER BY created_at DESC",
        )
        .bind(subscriber_id.to_string())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::internal(format!("Failed to list channels: {}", e)))?;

        rows.iter()
            .map(|row| {
                let channel_id: String = row.try_get("channel_id").map_err(|e| {
                    DomainError::internal(format!("Failed to get channel_id: {}", e))
                })?;
                Uuid::parse_str(&channel_id)
                    .map_err(|e| DomainError::internal(format!("Invalid channel UUID: {}", e)))
            })
            .collect()
    }
}
