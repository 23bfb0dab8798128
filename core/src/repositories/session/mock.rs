//! Mock implementation of SessionRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::session::SessionRecord;
use crate::errors::DomainError;

use super::repository::SessionRepository;

/// In-memory session repository
pub struct MockSessionRepository {
    records: Arc<RwLock<HashMap<Uuid, SessionRecord>>>,
}

impl MockSessionRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockSessionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRepository for MockSessionRepository {
    async fn upsert(&self, record: SessionRecord) -> Result<SessionRecord, DomainError> {
        let mut records = self.records.write().await;
        records.insert(record.user_id, record.clone());
        Ok(record)
    }

    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<SessionRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records.get(&user_id).cloned())
    }

    async fn rotate(
        &self,
        user_id: Uuid,
        expected_hash: &str,
        replacement: SessionRecord,
    ) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        match records.get(&user_id) {
            Some(current) if current.token_hash == expected_hash => {
                records.insert(user_id, replacement);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete(&self, user_id: Uuid) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        Ok(records.remove(&user_id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rotate_is_compare_and_swap() {
        let repo = MockSessionRepository::new();
        let user_id = Uuid::new_v4();

        repo.upsert(SessionRecord::new(user_id, "old-hash".to_string(), 60))
            .await
            .unwrap();

        // Wrong expected hash loses the swap
        let replacement = SessionRecord::new(user_id, "new-hash".to_string(), 60);
        assert!(!repo
            .rotate(user_id, "stale-hash", replacement.clone())
            .await
            .unwrap());

        // Matching expected hash wins
        assert!(repo.rotate(user_id, "old-hash", replacement).await.unwrap());

        let stored = repo.find_by_user(user_id).await.unwrap().unwrap();
        assert_eq!(stored.token_hash, "new-hash");
    }

    #[tokio::test]
    async fn test_rotate_fails_after_delete() {
        let repo = MockSessionRepository::new();
        let user_id = Uuid::new_v4();

        repo.upsert(SessionRecord::new(user_id, "hash".to_string(), 60))
            .await
            .unwrap();
        assert!(repo.delete(user_id).await.unwrap());
        assert!(!repo.delete(user_id).await.unwrap());

        let replacement = SessionRecord::new(user_id, "next".to_string(), 60);
        assert!(!repo.rotate(user_id, "hash", replacement).await.unwrap());
    }
}
