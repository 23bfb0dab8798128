//! Mock implementation of VideoRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::video::Video;
use crate::errors::DomainError;

use super::repository::{VideoQuery, VideoRepository};

/// In-memory video repository
pub struct MockVideoRepository {
    videos: Arc<RwLock<HashMap<Uuid, Video>>>,
}

impl MockVideoRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            videos: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockVideoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VideoRepository for MockVideoRepository {
    async fn create(&self, video: Video) -> Result<Video, DomainError> {
        let mut videos = self.videos.write().await;
        videos.insert(video.id, video.clone());
        Ok(video)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, DomainError> {
        let videos = self.videos.read().await;
        Ok(videos.get(&id).cloned())
    }

    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Video>, DomainError> {
        let videos = self.videos.read().await;
        Ok(ids.iter().filter_map(|id| videos.get(id).cloned()).collect())
    }

    async fn update(&self, video: Video) -> Result<Video, DomainError> {
        let mut videos = self.videos.write().await;
        if !videos.contains_key(&video.id) {
            return Err(DomainError::not_found("Video"));
        }
        videos.insert(video.id, video.clone());
        Ok(video)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut videos = self.videos.write().await;
        Ok(videos.remove(&id).is_some())
    }

    async fn list(&self, query: &VideoQuery) -> Result<(Vec<Video>, u64), DomainError> {
        let videos = self.videos.read().await;
        let mut matching: Vec<Video> = videos
            .values()
            .filter(|v| query.owner_id.map_or(true, |owner| v.owner_id == owner))
            .filter(|v| !query.published_only || v.is_published)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(query.page.offset() as usize)
            .take(query.page.limit as usize)
            .collect();
        Ok((page, total))
    }

    async fn increment_views(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut videos = self.videos.write().await;
        match videos.get_mut(&id) {
            Some(video) => {
                video.add_view();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
