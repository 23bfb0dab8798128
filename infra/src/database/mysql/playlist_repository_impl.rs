//! MySQL implementation of the PlaylistRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vs_core::domain::entities::playlist::Playlist;
use vs_core::errors::DomainError;
use vs_core::repositories::PlaylistRepository;

use super::is_duplicate_entry;

const PLAYLIST_COLUMNS: &str = "id, owner_id, name, description, video_ids, created_at, updated_at";

/// MySQL implementation of PlaylistRepository
///
/// The ordered video list is stored as a JSON array; name uniqueness is a
/// unique index.
pub struct MySqlPlaylistRepository {
    pool: MySqlPool,
}

impl MySqlPlaylistRepository {
    /// Create a new MySQL playlist repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_playlist(row: &sqlx::mysql::MySqlRow) -> Result<Playlist, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| DomainError::internal(format!("Failed to get owner_id: {}", e)))?;
        let video_ids: String = row
            .try_get("video_ids")
            .map_err(|e| DomainError::internal(format!("Failed to get video_ids: {}", e)))?;

        Ok(Playlist {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid playlist UUID: {}", e)))?,
            owner_id: Uuid::parse_str(&owner_id)
                .map_err(|e| DomainError::internal(format!("Invalid owner UUID: {}", e)))?,
            name: row
                .try_get("name")
                .map_err(|e| DomainError::internal(format!("Failed to get name: {}", e)))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::internal(format!("Failed to get description: {}", e)))?,
            video_ids: serde_json::from_str(&video_ids)
                .map_err(|e| DomainError::internal(format!("Invalid video_ids: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }

    fn encode_video_ids(playlist: &Playlist) -> Result<String, DomainError> {
        serde_json::to_string(&playlist.video_ids)
            .map_err(|e| DomainError::internal(format!("Failed to encode video_ids: {}", e)))
    }
}

#[async_trait]
impl PlaylistRepository for MySqlPlaylistRepository {
    async fn create(&self, playlist: Playlist) -> Result<Playlist, DomainError> {
        let query = r#"
            INSERT INTO playlists (id, owner_id, name, description, video_ids, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(playlist.id.to_string())
            .bind(playlist.owner_id.to_string())
            .bind(&playlist.name)
            .bind(&playlist.description)
            .bind(Self::encode_video_ids(&playlist)?)
            .bind(playlist.created_at)
            .bind(playlist.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate_entry(&e) {
                    DomainError::conflict("Playlist name already exists")
                } else {
                    DomainError::internal(format!("Failed to create playlist: {}", e))
                }
            })?;

        Ok(playlist)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Playlist>, DomainError> {
        let query = format!(
            "SELECT {} FROM playlists WHERE id = ? LIMIT 1",
            PLAYLIST_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find playlist: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_playlist(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Playlist>, DomainError> {
        let query = format!(
            "SELECT {} FROM playlists WHERE name = ? LIMIT 1",
            PLAYLIST_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find playlist by name: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_playlist(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, playlist: Playlist) -> Result<Playlist, DomainError> {
        let query = r#"
            UPDATE playlists
            SET name = ?, description = ?, video_ids = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&playlist.name)
            .bind(&playlist.description)
            .bind(Self::encode_video_ids(&playlist)?)
            .bind(playlist.updated_at)
            .bind(playlist.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_duplicate_entry(&e) {
                    DomainError::conflict("Playlist name already exists")
                } else {
                    DomainError::internal(format!("Failed to update playlist: {}", e))
                }
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Playlist"));
        }
        Ok(playlist)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM playlists WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete playlist: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_by_owner(&self, owner_id: Uuid) -> Result<Vec<Playlist>, DomainError> {
        let query = format!(
            "SELECT {} FROM playlists WHERE owner_id = ? ORDER BY created_at DESC",
            PLAYLIST_COLUMNS
        );

        let rows = sqlx::query(&query)
            .bind(owner_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to list playlists: {}", e)))?;

        rows.iter().map(Self::row_to_playlist).collect()
    }
}
