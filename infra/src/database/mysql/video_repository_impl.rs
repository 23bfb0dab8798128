//! MySQL implementation of the VideoRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vs_core::domain::entities::video::Video;
use vs_core::errors::DomainError;
use vs_core::repositories::{VideoQuery, VideoRepository};

const VIDEO_COLUMNS: &str = "id, owner_id, title, description, media_url, thumbnail_url, \
     duration_secs, views, is_published, created_at, updated_at";

/// MySQL implementation of VideoRepository
pub struct MySqlVideoRepository {
    pool: MySqlPool,
}

impl MySqlVideoRepository {
    /// Create a new MySQL video repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_video(row: &sqlx::mysql::MySqlRow) -> Result<Video, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let owner_id: String = row
            .try_get("owner_id")
            .map_err(|e| DomainError::internal(format!("Failed to get owner_id: {}", e)))?;

        Ok(Video {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid video UUID: {}", e)))?,
            owner_id: Uuid::parse_str(&owner_id)
                .map_err(|e| DomainError::internal(format!("Invalid owner UUID: {}", e)))?,
            title: row
                .try_get("title")
                .map_err(|e| DomainError::internal(format!("Failed to get title: {}", e)))?,
            description: row
                .try_get("description")
                .map_err(|e| DomainError::internal(format!("Failed to get description: {}", e)))?,
            media_url: row
                .try_get("media_url")
                .map_err(|e| DomainError::internal(format!("Failed to get media_url: {}", e)))?,
            thumbnail_url: row
                .try_get("thumbnail_url")
                .map_err(|e| DomainError::internal(format!("Failed to get thumbnail_url: {}", e)))?,
            duration_secs: row
                .try_get("duration_secs")
                .map_err(|e| DomainError::internal(format!("Failed to get duration_secs: {}", e)))?,
            views: row
                .try_get::<u64, _>("views")
                .map_err(|e| DomainError::internal(format!("Failed to get views: {}", e)))?,
            is_published: row
                .try_get("is_published")
                .map_err(|e| DomainError::internal(format!("Failed to get is_published: {}", e)))?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::internal(format!("Failed to get created_at: {}", e)))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::internal(format!("Failed to get updated_at: {}", e)))?,
        })
    }
}

#[async_trait]
impl VideoRepository for MySqlVideoRepository {
    async fn create(&self, video: Video) -> Result<Video, DomainError> {
        let query = r#"
            INSERT INTO videos (
                id, owner_id, title, description, media_url, thumbnail_url,
                duration_secs, views, is_published, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(video.id.to_string())
            .bind(video.owner_id.to_string())
            .bind(&video.title)
            .bind(&video.description)
            .bind(&video.media_url)
            .bind(&video.thumbnail_url)
            .bind(video.duration_secs)
            .bind(video.views)
            .bind(video.is_published)
            .bind(video.created_at)
            .bind(video.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to create video: {}", e)))?;

        Ok(video)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Video>, DomainError> {
        let query = format!("SELECT {} FROM videos WHERE id = ? LIMIT 1", VIDEO_COLUMNS);

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find video: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_video(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_many(&self, ids: &[Uuid]) -> Result<Vec<Video>, DomainError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let placeholders = vec!["?"; ids.len()].join(", ");
        let query = format!(
            "SELECT {} FROM videos WHERE id IN ({})",
            VIDEO_COLUMNS, placeholders
        );

        let mut q = sqlx::query(&query);
        for id in ids {
            q = q.bind(id.to_string());
        }

        let rows = q
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to fetch videos: {}", e)))?;

        let fetched: Vec<Video> = rows
            .iter()
            .map(Self::row_to_video)
            .collect::<Result<_, _>>()?;

        // Preserve the requested order (IN gives no ordering guarantee).
        let mut ordered = Vec::with_capacity(ids.len());
        for id in ids {
            if let Some(video) = fetched.iter().find(|v| v.id == *id) {
                ordered.push(video.clone());
            }
        }
        Ok(ordered)
    }

    async fn update(&self, video: Video) -> Result<Video, DomainError> {
        let query = r#"
            UPDATE videos
            SET title = ?, description = ?, media_url = ?, thumbnail_url = ?,
                duration_secs = ?, views = ?, is_published = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&video.title)
            .bind(&video.description)
            .bind(&video.media_url)
            .bind(&video.thumbnail_url)
            .bind(video.duration_secs)
            .bind(video.views)
            .bind(video.is_published)
            .bind(video.updated_at)
            .bind(video.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to update video: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Video"));
        }
        Ok(video)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM videos WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete video: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, query: &VideoQuery) -> Result<(Vec<Video>, u64), DomainError> {
        let mut filter = String::from(" FROM videos WHERE 1 = 1");
        if query.owner_id.is_some() {
            filter.push_str(" AND owner_id = ?");
        }
        if query.published_only {
            filter.push_str(" AND is_published = TRUE");
        }

        let count_sql = format!("SELECT COUNT(*) AS total{}", filter);
        let mut count_query = sqlx::query(&count_sql);
        if let Some(owner_id) = query.owner_id {
            count_query = count_query.bind(owner_id.to_string());
        }
        let count_row = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to count videos: {}", e)))?;
        let total: i64 = count_row
            .try_get("total")
            .map_err(|e| DomainError::internal(format!("Failed to get count: {}", e)))?;

        let list_sql = format!(
            "SELECT {}{} ORDER BY created_at DESC LIMIT ? OFFSET ?",
            VIDEO_COLUMNS, filter
        );
        let mut list_query = sqlx::query(&list_sql);
        if let Some(owner_id) = query.owner_id {
            list_query = list_query.bind(owner_id.to_string());
        }
        let rows = list_query
            .bind(query.page.limit)
            .bind(query.page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to list videos: {}", e)))?;

        let videos = rows
            .iter()
            .map(Self::row_to_video)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((videos, total as u64))
    }

    async fn increment_views(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("UPDATE videos SET views = views + 1 WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to increment views: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }
}
