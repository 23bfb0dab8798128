//! Subscription entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A subscriber-to-channel edge; the (subscriber, channel) pair is unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier for the subscription
    pub id: Uuid,

    /// The subscribing user
    pub subscriber_id: Uuid,

    /// The channel (user) being subscribed to
    pub channel_id: Uuid,

    /// Timestamp when the subscription was created
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    /// Creates a new subscription
    pub fn new(subscriber_id: Uuid, channel_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            subscriber_id,
            channel_id,
            created_at: Utc::now(),
        }
    }
}
