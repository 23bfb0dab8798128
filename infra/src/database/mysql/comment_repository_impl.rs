//! MySQL implementation of the CommentRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use vs_core::domain::entities::comment::Comment;
use vs_core::errors::DomainError;
use vs_core::repositories::{CommentQuery, CommentRepository, SortOrder};

const COMMENT_COLUMNS: &str = "id, video_id, author_id, content, created_at, updated_at";

/// MySQL implementation of CommentRepository
pub struct MySqlCommentRepository {
    pool: MySqlPool,
}

impl MySqlCommentRepository {
    /// Create a new MySQL comment repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_comment(row: &sqlx::mysql::MySqlRow) -> Result<Comment, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::internal(format!("Failed to get id: {}", e)))?;
        let video_id: String = row
            .try_get("video_id")
            .map_err(|e| DomainError::internal(format!("Failed to get video_id: {}", e)))?;
        let author_id: String = row
            .try_get("author_id")
            .map_err(|e| DomainError::internal(format!("Failed to get author_id: {}", e)))?;

        Ok(Comment {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid comment UUID: {}", e)))?,
            video_id: Uuid::parse_str(&video_id)
                .map_err(|e| DomainError::internal(format!("Invalid video UUID: {}", e)))?,
            author_id: Uuid::parse_str(&author_id)
                .map_err(|e| DomainError::internal(format!("Invalid author UUID: {}", e)))?,
            content: row
                .try_get("content")
                .map_err(|e| DomainError::internal(format!("Failed to get content: {}", e)))?,
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
impl CommentRepository for MySqlCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, DomainError> {
        let query = r#"
            INSERT INTO comments (id, video_id, author_id, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(comment.id.to_string())
            .bind(comment.video_id.to_string())
            .bind(comment.author_id.to_string())
            .bind(&comment.content)
            .bind(comment.created_at)
            .bind(comment.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to create comment: {}", e)))?;

        Ok(comment)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, DomainError> {
        let query = format!(
            "SELECT {} FROM comments WHERE id = ? LIMIT 1",
            COMMENT_COLUMNS
        );

        let result = sqlx::query(&query)
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to find comment: {}", e)))?;

        match result {
            Some(row) => Ok(Some(Self::row_to_comment(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, comment: Comment) -> Result<Comment, DomainError> {
        let query = "UPDATE comments SET content = ?, updated_at = ? WHERE id = ?";

        let result = sqlx::query(query)
            .bind(&comment.content)
            .bind(comment.updated_at)
            .bind(comment.id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to update comment: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found("Comment"));
        }
        Ok(comment)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM comments WHERE id = ?")
            .bind(id.to_string())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to delete comment: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn list(&self, query: &CommentQuery) -> Result<(Vec<Comment>, u64), DomainError> {
        let mut filter = String::from(" FROM comments WHERE 1 = 1");
        if query.video_id.is_some() {
            filter.push_str(" AND video_id = ?");
        }
        if query.author_id.is_some() {
            filter.push_str(" AND author_id = ?");
        }

        let count_sql = format!("SELECT COUNT(*) AS total{}", filter);
        let mut count_query = sqlx::query(&count_sql);
        if let Some(video_id) = query.video_id {
            count_query = count_query.bind(video_id.to_string());
        }
        if let Some(author_id) = query.author_id {
            count_query = count_query.bind(author_id.to_string());
        }
        let count_row = count_query
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to count comments: {}", e)))?;
        let total: i64 = count_row
            .try_get("total")
            .map_err(|e| DomainError::internal(format!("Failed to get count: {}", e)))?;

        let order = match query.sort {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        };
        let list_sql = format!(
            "SELECT {}{} ORDER BY created_at {} LIMIT ? OFFSET ?",
            COMMENT_COLUMNS, filter, order
        );
        let mut list_query = sqlx::query(&list_sql);
        if let Some(video_id) = query.video_id {
            list_query = list_query.bind(video_id.to_string());
        }
        if let Some(author_id) = query.author_id {
            list_query = list_query.bind(author_id.to_string());
        }
        let rows = list_query
            .bind(query.page.limit)
            .bind(query.page.offset())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to list comments: {}", e)))?;

        let comments = rows
            .iter()
            .map(Self::row_to_comment)
            .collect::<Result<Vec<_>, _>>()?;
        Ok((comments, total as u64))
    }
}
