//! Playlist entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum playlist name length
pub const PLAYLIST_NAME_MIN_LEN: usize = 5;

/// Maximum playlist name length
pub const PLAYLIST_NAME_MAX_LEN: usize = 20;

/// Minimum playlist description length
pub const PLAYLIST_DESCRIPTION_MIN_LEN: usize = 5;

/// Maximum playlist description length
pub const PLAYLIST_DESCRIPTION_MAX_LEN: usize = 200;

/// An ordered, duplicate-free collection of videos owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique identifier for the playlist
    pub id: Uuid,

    /// The user who owns the playlist
    pub owner_id: Uuid,

    /// Unique, normalized playlist name
    pub name: String,

    /// Playlist description
    pub description: String,

    /// Ordered video IDs; duplicates are rejected
    pub video_ids: Vec<Uuid>,

    /// Timestamp when the playlist was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the playlist was last updated
    pub updated_at: DateTime<Utc>,
}

impl Playlist {
    /// Creates a new, empty playlist
    pub fn new(owner_id: Uuid, name: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            owner_id,
            name,
            description,
            video_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Appends a video; returns false if it is already present
    pub fn add_video(&mut self, video_id: Uuid) -> bool {
        if self.video_ids.contains(&video_id) {
            return false;
        }
        self.video_ids.push(video_id);
        self.updated_at = Utc::now();
        true
    }

    /// Removes a video; returns false if it was not present
    pub fn remove_video(&mut self, video_id: Uuid) -> bool {
        let before = self.video_ids.len();
        self.video_ids.retain(|id| *id != video_id);
        if self.video_ids.len() == before {
            return false;
        }
        self.updated_at = Utc::now();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_videos_rejected() {
        let mut playlist =
            Playlist::new(Uuid::new_v4(), "mixes".to_string(), "weekly mixes".to_string());
        let video_id = Uuid::new_v4();

        assert!(playlist.add_video(video_id));
        assert!(!playlist.add_video(video_id));
        assert_eq!(playlist.video_ids.len(), 1);
    }

    #[test]
    fn test_remove_video() {
        let mut playlist =
            Playlist::new(Uuid::new_v4(), "mixes".to_string(), "weekly mixes".to_string());
        let video_id = Uuid::new_v4();
        playlist.add_video(video_id);

        assert!(playlist.remove_video(video_id));
        assert!(!playlist.remove_video(video_id));
        assert!(playlist.video_ids.is_empty());
    }
}
