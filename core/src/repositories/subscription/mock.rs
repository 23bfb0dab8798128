//! Mock implementation of SubscriptionRepository for testing

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::subscription::Subscription;
use crate::errors::DomainError;

use super::repository::SubscriptionRepository;

/// In-memory subscription repository
pub struct MockSubscriptionRepository {
    subscriptions: Arc<RwLock<Vec<Subscription>>>,
}

impl MockSubscriptionRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            subscriptions: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl Default for MockSubscriptionRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SubscriptionRepository for MockSubscriptionRepository {
    async fn create(&self, subscription: Subscription) -> Result<Subscription, DomainError> {
        let mut subscriptions = self.subscriptions.write().await;

        if subscriptions.iter().any(|s| {
            s.subscriber_id == subscription.subscriber_id && s.channel_id == subscription.channel_id
        }) {
            return Err(DomainError::conflict("Already subscribed"));
        }

        subscriptions.push(subscription.clone());
        Ok(subscription)
    }

    async fn find(
        &self,
        subscriber_id: Uuid,
        channel_id: Uuid,
    ) -> Result<Option<Subscription>, DomainError> {
        let subscriptions = self.subscriptions.read().await;
        Ok(subscriptions
            .iter()
            .find(|s| s.subscriber_id == subscriber_id && s.channel_id == channel_id)
            .cloned())
    }

    async fn delete(&self, subscriber_id: Uuid, channel_id: Uuid) -> Result<bool, DomainError> {
        let mut subscriptions = self.subscriptions.write().await;
        let before = subscriptions.len();
        subscriptions
            .retain(|s| !(s.subscriber_id == subscriber_id && s.channel_id == channel_id));
        Ok(subscriptions.len() != before)
    }

    async fn count_for_channel(&self, channel_id: Uuid) -> Result<u64, DomainError> {
        let subscriptions = self.subscriptions.read().await;
        Ok(subscriptions
            .iter()
            .filter(|s| s.channel_id == channel_id)
            .count() as u64)
    }

    async fn list_channels(&self, subscriber_id: Uuid) -> Result<Vec<Uuid>, DomainError> {
        let subscriptions = self.subscriptions.read().await;
        let mut edges: Vec<&Subscription> = subscriptions
            .iter()
            .filter(|s| s.subscriber_id == subscriber_id)
            .collect();
        edges.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(edges.iter().map(|s| s.channel_id).collect())
    }
}
