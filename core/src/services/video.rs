//! Video service: publishing and reading video metadata.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::video::Video;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{UserRepository, VideoQuery, VideoRepository};
use crate::services::media::MediaStorage;
use vs_shared::types::pagination::Page;
use vs_shared::utils::validation::is_blank;

/// Input for publishing a new video
///
/// The paths point at files already staged locally by the upload middleware;
/// both are pushed to the media host before any row is written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVideo {
    pub title: String,
    pub description: String,
    pub media_path: String,
    pub thumbnail_path: String,
}

/// Service for video metadata operations
pub struct VideoService<V, U, M>
where
    V: VideoRepository,
    U: UserRepository,
    M: MediaStorage,
{
    videos: Arc<V>,
    users: Arc<U>,
    media: Arc<M>,
}

impl<V, U, M> VideoService<V, U, M>
where
    V: VideoRepository,
    U: UserRepository,
    M: MediaStorage,
{
    /// Create a new video service
    pub fn new(videos: Arc<V>, users: Arc<U>, media: Arc<M>) -> Self {
        Self {
            videos,
            users,
            media,
        }
    }

    /// Upload media and thumbnail to the host, then persist the metadata
    ///
    /// An upload failure aborts before anything is written to the store.
    pub async fn publish(&self, owner_id: Uuid, new_video: NewVideo) -> DomainResult<Video> {
        if is_blank(&new_video.title) {
            return Err(ValidationError::RequiredField {
                field: "title".to_string(),
            }
            .into());
        }
        if is_blank(&new_video.description) {
            return Err(ValidationError::RequiredField {
                field: "description".to_string(),
            }
            .into());
        }
        if is_blank(&new_video.media_path) {
            return Err(ValidationError::RequiredField {
                field: "video".to_string(),
            }
            .into());
        }
        if is_blank(&new_video.thumbnail_path) {
            return Err(ValidationError::RequiredField {
                field: "thumbnail".to_string(),
            }
            .into());
        }

        let uploaded = self.media.upload(&new_video.media_path).await?;
        let thumbnail = self.media.upload(&new_video.thumbnail_path).await?;
        tracing::debug!(
            provider = self.media.provider_name(),
            url = %uploaded.url,
            "media uploaded"
        );

        let video = Video::new(
            owner_id,
            new_video.title.trim().to_string(),
            new_video.description.trim().to_string(),
            uploaded.url,
            thumbnail.url,
            uploaded.duration_secs.unwrap_or(0.0),
        );
        self.videos.create(video).await
    }

    /// Fetch a video by ID
    pub async fn get(&self, id: Uuid) -> DomainResult<Video> {
        self.videos
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Video"))
    }

    /// Paginated listing
    pub async fn list(&self, query: VideoQuery) -> DomainResult<Page<Video>> {
        if !query.page.is_valid() {
            return Err(DomainError::bad_request(
                "page and limit must be positive integers",
            ));
        }
        let (items, total) = self.videos.list(&query).await?;
        Ok(Page::new(items, total, query.page))
    }

    /// Toggle a video's published flag; only the owner may do this
    pub async fn set_published(
        &self,
        owner_id: Uuid,
        video_id: Uuid,
        published: bool,
    ) -> DomainResult<Video> {
        let mut video = self.get(video_id).await?;
        if video.owner_id != owner_id {
            // Not revealing whether the video exists to non-owners.
            return Err(DomainError::not_found("Video"));
        }
        video.set_published(published);
        self.videos.update(video).await
    }

    /// Record that a user watched a video: bumps the view counter and
    /// appends to the user's watch history
    pub async fn record_watch(&self, user_id: Uuid, video_id: Uuid) -> DomainResult<()> {
        if !self.videos.increment_views(video_id).await? {
            return Err(DomainError::not_found("Video"));
        }

        let mut user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        user.record_watch(video_id);
        self.users.update(user).await?;
        Ok(())
    }

    /// The videos in a user's watch history, oldest watch first
    pub async fn watch_history(&self, user_id: Uuid) -> DomainResult<Vec<Video>> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| DomainError::not_found("User"))?;
        self.videos.find_many(&user.watch_history).await
    }

    /// Delete a video; only the owner may do this
    pub async fn remove(&self, owner_id: Uuid, video_id: Uuid) -> DomainResult<()> {
        let video = self.get(video_id).await?;
        if video.owner_id != owner_id {
            return Err(DomainError::not_found("Video"));
        }
        self.videos.delete(video_id).await?;
        // Hosted assets are cleaned up best-effort; a failure here must not
        // fail the delete.
        let _ = self.media.delete(&video.media_url).await;
        let _ = self.media.delete(&video.thumbnail_url).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::user::MockUserRepository;
    use crate::repositories::video::MockVideoRepository;
    use crate::services::media::MockMediaStorage;
    use vs_shared::types::pagination::PageParams;

    use crate::domain::entities::user::User;

    type TestVideoService = VideoService<MockVideoRepository, MockUserRepository, MockMediaStorage>;

    async fn build_service() -> (TestVideoService, User) {
        let user = User::new(
            "alice".to_string(),
            "alice@x.com".to_string(),
            "$2b$10$hash".to_string(),
            "https://media.test/a.png".to_string(),
            None,
            None,
        );
        let users = Arc::new(MockUserRepository::with_existing_user(user.clone()).await);
        let service = VideoService::new(
            Arc::new(MockVideoRepository::new()),
            users,
            Arc::new(MockMediaStorage::new()),
        );
        (service, user)
    }

    fn new_video(title: &str) -> NewVideo {
        NewVideo {
            title: title.to_string(),
            description: "a description".to_string(),
            media_path: "/tmp/staging/clip.mp4".to_string(),
            thumbnail_path: "/tmp/staging/thumb.png".to_string(),
        }
    }

    #[tokio::test]
    async fn test_publish_uploads_then_persists() {
        let (service, owner) = build_service().await;

        let video = service.publish(owner.id, new_video("Intro")).await.unwrap();
        assert_eq!(video.title, "Intro");
        assert_eq!(video.media_url, "https://media.test/clip.mp4");
        assert_eq!(video.thumbnail_url, "https://media.test/thumb.png");
        assert!(!video.is_published);

        let fetched = service.get(video.id).await.unwrap();
        assert_eq!(fetched, video);
    }

    #[tokio::test]
    async fn test_publish_requires_title() {
        let (service, owner) = build_service().await;
        let err = service.publish(owner.id, new_video("  ")).await.unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::RequiredField { .. })
        ));
    }

    #[tokio::test]
    async fn test_only_owner_toggles_publish() {
        let (service, owner) = build_service().await;
        let video = service.publish(owner.id, new_video("Intro")).await.unwrap();

        let published = service.set_published(owner.id, video.id, true).await.unwrap();
        assert!(published.is_published);

        let err = service
            .set_published(Uuid::new_v4(), video.id, false)
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_record_watch_updates_history_and_views() {
        let (service, owner) = build_service().await;
        let video = service.publish(owner.id, new_video("Intro")).await.unwrap();

        service.record_watch(owner.id, video.id).await.unwrap();
        service.record_watch(owner.id, video.id).await.unwrap();

        let history = service.watch_history(owner.id).await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].id, video.id);

        let fetched = service.get(video.id).await.unwrap();
        assert_eq!(fetched.views, 2);
    }

    #[tokio::test]
    async fn test_list_published_only() {
        let (service, owner) = build_service().await;
        let a = service.publish(owner.id, new_video("first")).await.unwrap();
        service.publish(owner.id, new_video("second")).await.unwrap();
        service.set_published(owner.id, a.id, true).await.unwrap();

        let page = service
            .list(VideoQuery {
                owner_id: Some(owner.id),
                published_only: true,
                page: PageParams::default(),
            })
            .await
            .unwrap();

        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].id, a.id);
    }
}
