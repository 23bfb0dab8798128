//! Playlist repository trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::playlist::Playlist;
use crate::errors::DomainError;

/// Repository trait for Playlist entity persistence operations
///
/// Playlist names are globally unique and arrive normalized.
#[async_trait]
pub trait PlaylistRepository: Send + Sync {
    /// Create a new playlist
    ///
    /// # Returns
    /// * `Err(DomainError::Conflict)` - A playlist with the same name exists
    async fn create(&self, playlist: Playlist) -> Result<Playlist, DomainError>;

    /// Find a playlist by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Playlist>, DomainError>;

    /// Find a playlist by its normalized name
    async fn find_by_name(&self, name: &str) -> Result<Option<Playlist>, DomainError>;

    /// Update an existing playlist (including its video list)
    async fn update(&self, playlist: Playlist) -> Result<Playlist, DomainError>;

    /// Delete a playlist
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// List playlists owned by a user, newest first
    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Playlist>, DomainError>;
}
