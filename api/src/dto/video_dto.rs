//! Video DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PublishVideoRequest {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub description: String,
    /// Path of the video file staged by the upload middleware
    #[validate(length(min = 1))]
    pub video_path: String,
    /// Path of the thumbnail file staged by the upload middleware
    #[validate(length(min = 1))]
    pub thumbnail_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListVideosQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub owner_id: Option<Uuid>,
    /// When true, only published videos are returned
    pub published: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetPublishedRequest {
    pub published: bool,
}
