//! Subscription service.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::subscription::Subscription;
use crate::domain::entities::user::UserProfile;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{SubscriptionRepository, UserRepository};

/// Result of toggling a subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionStatus {
    /// Whether the user is subscribed after the toggle
    pub subscribed: bool,
}

/// Service for channel subscriptions
pub struct SubscriptionService<B, U>
where
    B: SubscriptionRepository,
    U: UserRepository,
{
    subscriptions: Arc<B>,
    users: Arc<U>,
}

impl<B, U> SubscriptionService<B, U>
where
    B: SubscriptionRepository,
    U: UserRepository,
{
    /// Create a new subscription service
    pub fn new(subscriptions: Arc<B>, users: Arc<U>) -> Self {
        Self {
            subscriptions,
            users,
        }
    }

    /// Subscribe if not subscribed, unsubscribe otherwise
    pub async fn toggle(
        &self,
        subscriber_id: Uuid,
        channel_id: Uuid,
    ) -> DomainResult<SubscriptionStatus> {
        if subscriber_id == channel_id {
            return Err(DomainError::bad_request(
                "Cannot subscribe to your own channel",
            ));
        }
        if self.users.find_by_id(channel_id).await?.is_none() {
            return Err(DomainError::not_found("Channel"));
        }

        if self
            .subscriptions
            .find(subscriber_id, channel_id)
            .await?
            .is_some()
        {
            self.subscriptions.delete(subscriber_id, channel_id).await?;
            Ok(SubscriptionStatus { subscribed: false })
        } else {
            self.subscriptions
                .create(Subscription::new(subscriber_id, channel_id))
                .await?;
            Ok(SubscriptionStatus { subscribed: true })
        }
    }

    /// Number of subscribers a channel has
    pub async fn subscriber_count(&self, channel_id: Uuid) -> DomainResult<u64> {
        if self.users.find_by_id(channel_id).await?.is_none() {
            return Err(DomainError::not_found("Channel"));
        }
        self.subscriptions.count_for_channel(channel_id).await
    }

    /// Profiles of the channels a user is subscribed to
    pub async fn subscribed_channels(&self, subscriber_id: Uuid) -> DomainResult<Vec<UserProfile>> {
        let channel_ids = self.subscriptions.list_channels(subscriber_id).await?;

        let mut channels = Vec::with_capacity(channel_ids.len());
        for channel_id in channel_ids {
            if let Some(user) = self.users.find_by_id(channel_id).await? {
                channels.push(UserProfile::from(user));
            }
        }
        Ok(channels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::user::User;
    use crate::repositories::subscription::MockSubscriptionRepository;
    use crate::repositories::user::MockUserRepository;

    type TestSubscriptionService =
        SubscriptionService<MockSubscriptionRepository, MockUserRepository>;

    async fn build_service() -> (TestSubscriptionService, User, User) {
        let users = Arc::new(MockUserRepository::new());
        let alice = users
            .create(User::new(
                "alice".to_string(),
                "alice@x.com".to_string(),
                "$2b$10$hash".to_string(),
                "https://media.test/a.png".to_string(),
                None,
                None,
            ))
            .await
            .unwrap();
        let bobby = users
            .create(User::new(
                "bobby".to_string(),
                "bob@x.com".to_string(),
                "$2b$10$hash".to_string(),
                "https://media.test/b.png".to_string(),
                None,
                None,
            ))
            .await
            .unwrap();

        let service = SubscriptionService::new(Arc::new(MockSubscriptionRepository::new()), users);
        (service, alice, bobby)
    }

    #[tokio::test]
    async fn test_toggle_subscribes_then_unsubscribes() {
        let (service, alice, bobby) = build_service().await;

        let status = service.toggle(alice.id, bobby.id).await.unwrap();
        assert!(status.subscribed);
        assert_eq!(service.subscriber_count(bobby.id).await.unwrap(), 1);

        let status = service.toggle(alice.id, bobby.id).await.unwrap();
        assert!(!status.subscribed);
        assert_eq!(service.subscriber_count(bobby.id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_self_subscription_rejected() {
        let (service, alice, _) = build_service().await;
        let err = service.toggle(alice.id, alice.id).await.unwrap_err();
        assert!(matches!(err, DomainError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn test_unknown_channel_rejected() {
        let (service, alice, _) = build_service().await;
        let err = service.toggle(alice.id, Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_subscribed_channels_returns_profiles() {
        let (service, alice, bobby) = build_service().await;
        service.toggle(alice.id, bobby.id).await.unwrap();

        let channels = service.subscribed_channels(alice.id).await.unwrap();
        assert_eq!(channels.len(), 1);
        assert_eq!(channels[0].username, "bobby");
    }
}
