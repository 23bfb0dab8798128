//! Subscription repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::subscription::Subscription;
use crate::errors::DomainError;

/// Repository trait for Subscription persistence operations
///
/// The (subscriber, channel) pair is unique in the store.
#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Create a subscription edge
    async fn create(&self, subscription: Subscription) -> Result<Subscription, DomainError>;

    /// Find a subscription edge if it exists
    async fn find(
        &self,
        subscriber_id: Uuid,
        channel_id: Uuid,
    ) -> Result<Option<Subscription>, DomainError>;

    /// Delete a subscription edge
    ///
    /// # Returns
    /// * `Ok(true)` - Edge deleted
    /// * `Ok(false)` - No such edge
    async fn delete(&self, subscriber_id: Uuid, channel_id: Uuid) -> Result<bool, DomainError>;

    /// Number of subscribers a channel has
    async fn count_for_channel(&self, channel_id: Uuid) -> Result<u64, DomainError>;

    /// IDs of channels a user is subscribed to, newest first
    async fn list_channels(&self, subscriber_id: Uuid) -> Result<Vec<Uuid>, DomainError>;
}
