//! Comment repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::comment::Comment;
use crate::errors::DomainError;
use vs_shared::types::pagination::PageParams;

/// Sort direction for listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Listing filter for comments
#[derive(Debug, Clone, Default)]
pub struct CommentQuery {
    /// Restrict to a single video
    pub video_id: Option<Uuid>,

    /// Restrict to a single author
    pub author_id: Option<Uuid>,

    /// Sort by creation time
    pub sort: SortOrder,

    /// Page to fetch
    pub page: PageParams,
}

/// Repository trait for Comment entity persistence operations
#[async_trait]
pub trait CommentRepository: Send + Sync {
    /// Create a new comment
    async fn create(&self, comment: Comment) -> Result<Comment, DomainError>;

    /// Find a comment by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, DomainError>;

    /// Update an existing comment
    async fn update(&self, comment: Comment) -> Result<Comment, DomainError>;

    /// Delete a comment
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// List comments matching the query with the total count
    async fn list(&self, query: &CommentQuery) -> Result<(Vec<Comment>, u64), DomainError>;
}
