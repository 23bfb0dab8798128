//! Playlist service.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::playlist::{
    Playlist, PLAYLIST_DESCRIPTION_MAX_LEN, PLAYLIST_DESCRIPTION_MIN_LEN, PLAYLIST_NAME_MAX_LEN,
    PLAYLIST_NAME_MIN_LEN,
};
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{PlaylistRepository, VideoRepository};
use vs_shared::utils::validation::normalize_identifier;

/// Service for playlist operations
pub struct PlaylistService<P, V>
where
    P: PlaylistRepository,
    V: VideoRepository,
{
    playlists: Arc<P>,
    videos: Arc<V>,
}

impl<P, V> PlaylistService<P, V>
where
    P: PlaylistRepository,
    V: VideoRepository,
{
    /// Create a new playlist service
    pub fn new(playlists: Arc<P>, videos: Arc<V>) -> Self {
        Self { playlists, videos }
    }

    /// Create a playlist with a globally unique, normalized name
    pub async fn create(
        &self,
        owner_id: Uuid,
        name: &str,
        description: &str,
    ) -> DomainResult<Playlist> {
        let name = normalize_identifier(name);
        let name_len = name.chars().count();
        if !(PLAYLIST_NAME_MIN_LEN..=PLAYLIST_NAME_MAX_LEN).contains(&name_len) {
            return Err(ValidationError::InvalidLength {
                field: "name".to_string(),
                min: PLAYLIST_NAME_MIN_LEN,
                max: PLAYLIST_NAME_MAX_LEN,
            }
            .into());
        }

        let description = description.trim();
        let description_len = description.chars().count();
        if !(PLAYLIST_DESCRIPTION_MIN_LEN..=PLAYLIST_DESCRIPTION_MAX_LEN).contains(&description_len)
        {
            return Err(ValidationError::InvalidLength {
                field: "description".to_string(),
                min: PLAYLIST_DESCRIPTION_MIN_LEN,
                max: PLAYLIST_DESCRIPTION_MAX_LEN,
            }
            .into());
        }

        if self.playlists.find_by_name(&name).await?.is_some() {
            return Err(DomainError::conflict("Playlist name already exists"));
        }

        let playlist = Playlist::new(owner_id, name, description.to_string());
        self.playlists.create(playlist).await
    }

    /// Fetch a playlist by ID
    pub async fn get(&self, id: Uuid) -> DomainResult<Playlist> {
        self.playlists
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Playlist"))
    }

    /// Add a video to an owned playlist; duplicates are rejected
    pub async fn add_video(
        &self,
        owner_id: Uuid,
        playlist_id: Uuid,
        video_id: Uuid,
    ) -> DomainResult<Playlist> {
        let mut playlist = self.owned(owner_id, playlist_id).await?;

        if self.videos.find_by_id(video_id).await?.is_none() {
            return Err(DomainError::not_found("Video"));
        }
        if !playlist.add_video(video_id) {
            return Err(DomainError::conflict("Duplicate videos are not allowed"));
        }

        self.playlists.update(playlist).await
    }

    /// Remove a video from an owned playlist
    pub async fn remove_video(
        &self,
        owner_id: Uuid,
        playlist_id: Uuid,
        video_id: Uuid,
    ) -> DomainResult<Playlist> {
        let mut playlist = self.owned(owner_id, playlist_id).await?;

        if !playlist.remove_video(video_id) {
            return Err(DomainError::not_found("Video"));
        }

        self.playlists.update(playlist).await
    }

    /// Playlists owned by a user, newest first
    pub async fn list_by_owner(&self, owner_id: Uuid) -> DomainResult<Vec<Playlist>> {
        self.playlists.list_by_owner(owner_id).await
    }

    /// Delete an owned playlist
    pub async fn remove(&self, owner_id: Uuid, playlist_id: Uuid) -> DomainResult<()> {
        let playlist = self.owned(owner_id, playlist_id).await?;
        self.playlists.delete(playlist.id).await?;
        Ok(())
    }

    async fn owned(&self, owner_id: Uuid, playlist_id: Uuid) -> DomainResult<Playlist> {
        let playlist = self.get(playlist_id).await?;
        if playlist.owner_id != owner_id {
            return Err(DomainError::not_found("Playlist"));
        }
        Ok(playlist)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::video::Video;
    use crate::repositories::playlist::MockPlaylistRepository;
    use crate::repositories::video::MockVideoRepository;

    type TestPlaylistService = PlaylistService<MockPlaylistRepository, MockVideoRepository>;

    async fn build_service() -> (TestPlaylistService, Video) {
        let videos = Arc::new(MockVideoRepository::new());
        let video = videos
            .create(Video::new(
                Uuid::new_v4(),
                "Intro".to_string(),
                "d".to_string(),
                "https://media.test/v.mp4".to_string(),
                "https://media.test/t.png".to_string(),
                1.0,
            ))
            .await
            .unwrap();
        let service = PlaylistService::new(Arc::new(MockPlaylistRepository::new()), videos);
        (service, video)
    }

    #[tokio::test]
    async fn test_create_normalizes_and_enforces_unique_name() {
        let (service, _) = build_service().await;
        let owner = Uuid::new_v4();

        let playlist = service
            .create(owner, "  Mixes ", "weekly mixes")
            .await
            .unwrap();
        assert_eq!(playlist.name, "mixes");

        let err = service
            .create(Uuid::new_v4(), "MIXES", "another list")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_validates_lengths() {
        let (service, _) = build_service().await;
        let owner = Uuid::new_v4();

        let err = service.create(owner, "abc", "description").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::InvalidLength { .. })
        ));

        let err = service.create(owner, "valid name", "abc").await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::InvalidLength { .. })
        ));
    }

    #[tokio::test]
    async fn test_add_video_rejects_duplicates_and_unknown_videos() {
        let (service, video) = build_service().await;
        let owner = Uuid::new_v4();
        let playlist = service.create(owner, "mixes", "weekly mixes").await.unwrap();

        service.add_video(owner, playlist.id, video.id).await.unwrap();

        let err = service
            .add_video(owner, playlist.id, video.id)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict { .. }));

        let err = service
            .add_video(owner, playlist.id, Uuid::new_v4())
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_ownership_checks() {
        let (service, video) = build_service().await;
        let owner = Uuid::new_v4();
        let stranger = Uuid::new_v4();
        let playlist = service.create(owner, "mixes", "weekly mixes").await.unwrap();

        let err = service
            .add_video(stranger, playlist.id, video.id)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let err = service.remove(stranger, playlist.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        service.remove(owner, playlist.id).await.unwrap();
        assert!(service.list_by_owner(owner).await.unwrap().is_empty());
    }
}
