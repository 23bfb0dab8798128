//! Mock implementation of PlaylistRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::playlist::Playlist;
use crate::errors::DomainError;

use super::repository::PlaylistRepository;

/// In-memory playlist repository
pub struct MockPlaylistRepository {
    playlists: Arc<RwLock<HashMap<Uuid, Playlist>>>,
}

impl MockPlaylistRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            playlists: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockPlaylistRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PlaylistRepository for MockPlaylistRepository {
    async fn create(&self, playlist: Playlist) -> Result<Playlist, DomainError> {
        let mut playlists = self.playlists.write().await;

        if playlists.values().any(|p| p.name == playlist.name) {
            return Err(DomainError::conflict("Playlist name already exists"));
        }

        playlists.insert(playlist.id, playlist.clone());
        Ok(playlist)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Playlist>, DomainError> {
        let playlists = self.playlists.read().await;
        Ok(playlists.get(&id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Playlist>, DomainError> {
        let playlists = self.playlists.read().await;
        Ok(playlists.values().find(|p| p.name == name).cloned())
    }

    async fn update(&self, playlist: Playlist) -> Result<Playlist, DomainError> {
        let mut playlists = self.playlists.write().await;
        if !playlists.contains_key(&playlist.id) {
            return Err(DomainError::not_found("Playlist"));
        }
        playlists.insert(playlist.id, playlist.clone());
        Ok(playlist)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut playlists = self.playlists.write().await;
        Ok(playlists.remove(&id).is_some())
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Playlist>, DomainError> {
        let playlists = self.playlists.read().await;
        let mut owned: Vec<Playlist> = playlists
            .values()
            .filter(|p| p.owner_id == owner_id)
            .cloned()
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(owned)
    }
}
