//! Subscription DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleSubscriptionRequest {
    pub channel_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubscriberCountResponse {
    pub channel_id: Uuid,
    pub subscribers: u64,
}
