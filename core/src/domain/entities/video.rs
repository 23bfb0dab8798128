//! Video entity: metadata for a hosted video.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Video metadata; the media itself lives at the hosting provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    /// Unique identifier for the video
    pub id: Uuid,

    /// The user who uploaded the video
    pub owner_id: Uuid,

    /// Video title
    pub title: String,

    /// Video description
    pub description: String,

    /// Hosted media URL
    pub media_url: String,

    /// Hosted thumbnail URL
    pub thumbnail_url: String,

    /// Duration in seconds as reported by the media host
    pub duration_secs: f64,

    /// View counter
    pub views: u64,

    /// Whether the video is visible to other users
    pub is_published: bool,

    /// Timestamp when the video was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the video was last updated
    pub updated_at: DateTime<Utc>,
}

impl Video {
    /// Creates a new, unpublished video record
    pub fn new(
        owner_id: Uuid,
        title: String,
        description: String,
        media_url: String,
        thumbnail_url: String,
        duration_secs: f64,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            title,
            description,
            media_url,
            thumbnail_url,
            duration_secs,
            views: 0,
            is_published: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Flips visibility
    pub fn set_published(&mut self, published: bool) {
        self.is_published = published;
        self.updated_at = Utc::now();
    }

    /// Increments the view counter
    pub fn add_view(&mut self) {
        self.views += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_video_unpublished() {
        let video = Video::new(
            Uuid::new_v4(),
            "Intro".to_string(),
            "First video".to_string(),
            "https://media.example/v.mp4".to_string(),
            "https://media.example/t.png".to_string(),
            42.5,
        );

        assert!(!video.is_published);
        assert_eq!(video.views, 0);
        assert_eq!(video.duration_secs, 42.5);
    }

    #[test]
    fn test_publish_toggle() {
        let mut video = Video::new(
            Uuid::new_v4(),
            "t".to_string(),
            "d".to_string(),
            "m".to_string(),
            "th".to_string(),
            1.0,
        );
        video.set_published(true);
        assert!(video.is_published);
        video.set_published(false);
        assert!(!video.is_published);
    }
}
