//! Video repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::video::Video;
use crate::errors::DomainError;
use vs_shared::types::pagination::PageParams;

/// Listing filter for videos
#[derive(Debug, Clone, Default)]
pub struct VideoQuery {
    /// Restrict to a single owner
    pub owner_id: Option<Uuid>,

    /// Only return published videos
    pub published_only: bool,

    /// Page to fetch
    pub page: PageParams,
}

/// Repository trait for Video entity persistence operations
#[async_trait]
pub trait VideoRepository: Send + Sync {
    /// Create a new video record
    async fn create(&self, video: Video) -> Result<Video, DomainError>;

    /// Find a video by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, DomainError>;

    /// Fetch several videos by ID, preserving the requested order
    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Video>, DomainError>;

    /// Update an existing video
    async fn update(&self, video: Video) -> Result<Video, DomainError>;

    /// Delete a video
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// List videos matching the query, newest first, with the total count
    async fn list(&self, query: &VideoQuery) -> Result<(Vec<Video>, u64), DomainError>;

    /// Atomically bump the view counter
    ///
    /// # Returns
    /// * `Ok(true)` - Counter incremented
    /// * `Ok(false)` - Video not found
    async fn increment_views(&self, id: Uuid) -> Result<bool, DomainError>;
}
