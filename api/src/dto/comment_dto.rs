//! Comment DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddCommentRequest {
    pub video_id: Uuid,
    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[validate(length(min = 1))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListCommentsQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub video_id: Option<Uuid>,
    pub author_id: Option<Uuid>,
    /// "ASC" or "DESC" (default DESC)
    pub sort_type: Option<String>,
}
