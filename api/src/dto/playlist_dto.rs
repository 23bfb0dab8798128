//! Playlist DTOs

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePlaylistRequest {
    #[validate(length(min = 5, max = 20))]
    pub name: String,
    #[validate(length(min = 5, max = 200))]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddPlaylistVideoRequest {
    pub video_id: Uuid,
}
