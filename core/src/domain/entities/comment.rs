//! Comment entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A comment left by a user on a video
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique identifier for the comment
    pub id: Uuid,

    /// The video this comment belongs to
    pub video_id: Uuid,

    /// The user who wrote the comment
    pub author_id: Uuid,

    /// Comment text
    pub content: String,

    /// Timestamp when the comment was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the comment was last updated
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a new comment
    pub fn new(video_id: Uuid, author_id: Uuid, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            video_id,
            author_id,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces the comment text
    pub fn edit(&mut self, content: String) {
        self.content = content;
        self.updated_at = Utc::now();
    }
}
