//! Comment service.

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::entities::comment::Comment;
use crate::errors::{DomainError, DomainResult, ValidationError};
use crate::repositories::{CommentQuery, CommentRepository, VideoRepository};
use vs_shared::types::pagination::Page;
use vs_shared::utils::validation::is_blank;

/// Service for comment operations
pub struct CommentService<C, V>
where
    C: CommentRepository,
    V: VideoRepository,
{
    comments: Arc<C>,
    videos: Arc<V>,
}

impl<C, V> CommentService<C, V>
where
    C: CommentRepository,
    V: VideoRepository,
{
    /// Create a new comment service
    pub fn new(comments: Arc<C>, videos: Arc<V>) -> Self {
        Self { comments, videos }
    }

    /// Add a comment to an existing video
    pub async fn add(&self, author_id: Uuid, video_id: Uuid, content: &str) -> DomainResult<Comment> {
        if is_blank(content) {
            return Err(ValidationError::RequiredField {
                field: "content".to_string(),
            }
            .into());
        }

        if self.videos.find_by_id(video_id).await?.is_none() {
            return Err(DomainError::not_found("Video"));
        }

        let comment = Comment::new(video_id, author_id, content.trim().to_string());
        self.comments.create(comment).await
    }

    /// Paginated, sorted listing filtered by video and/or author
    pub async fn list(&self, query: CommentQuery) -> DomainResult<Page<Comment>> {
        if !query.page.is_valid() {
            return Err(DomainError::bad_request(
                "page and limit must be positive integers",
            ));
        }
        let (items, total) = self.comments.list(&query).await?;
        Ok(Page::new(items, total, query.page))
    }

    /// Edit a comment; only its author may do this
    pub async fn edit(&self, author_id: Uuid, id: Uuid, content: &str) -> DomainResult<Comment> {
        if is_blank(content) {
            return Err(ValidationError::RequiredField {
                field: "content".to_string(),
            }
            .into());
        }

        let mut comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Comment"))?;
        if comment.author_id != author_id {
            // Same answer as a missing comment: do not leak other users'
            // comment IDs.
            return Err(DomainError::not_found("Comment"));
        }

        comment.edit(content.trim().to_string());
        self.comments.update(comment).await
    }

    /// Delete a comment; only its author may do this
    pub async fn remove(&self, author_id: Uuid, id: Uuid) -> DomainResult<Comment> {
        let comment = self
            .comments
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::not_found("Comment"))?;
        if comment.author_id != author_id {
            return Err(DomainError::not_found("Comment"));
        }

        self.comments.delete(id).await?;
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::video::Video;
    use crate::repositories::comment::{MockCommentRepository, SortOrder};
    use crate::repositories::video::MockVideoRepository;
    use vs_shared::types::pagination::PageParams;

    type TestCommentService = CommentService<MockCommentRepository, MockVideoRepository>;

    async fn build_service() -> (TestCommentService, Video) {
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
        let service = CommentService::new(Arc::new(MockCommentRepository::new()), videos);
        (service, video)
    }

    #[tokio::test]
    async fn test_add_requires_existing_video() {
        let (service, _) = build_service().await;
        let err = service
            .add(Uuid::new_v4(), Uuid::new_v4(), "first!")
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_add_and_list() {
        let (service, video) = build_service().await;
        let author = Uuid::new_v4();

        service.add(author, video.id, "first!").await.unwrap();
        service.add(author, video.id, "second!").await.unwrap();

        let page = service
            .list(CommentQuery {
                video_id: Some(video.id),
                author_id: None,
                sort: SortOrder::Asc,
                page: PageParams::default(),
            })
            .await
            .unwrap();

        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].content, "first!");
    }

    #[tokio::test]
    async fn test_list_rejects_bad_pagination() {
        let (service, _) = build_service().await;
        let err = service
            .list(CommentQuery {
                page: PageParams { page: 0, limit: 10 },
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn test_only_author_edits_and_removes() {
        let (service, video) = build_service().await;
        let author = Uuid::new_v4();
        let stranger = Uuid::new_v4();

        let comment = service.add(author, video.id, "mine").await.unwrap();

        let err = service.edit(stranger, comment.id, "hijack").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));

        let edited = service.edit(author, comment.id, "edited").await.unwrap();
        assert_eq!(edited.content, "edited");

        let err = service.remove(stranger, comment.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { .. }));
        service.remove(author, comment.id).await.unwrap();
    }
}
