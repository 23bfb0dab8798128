//! Mock implementation of CommentRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::comment::Comment;
use crate::errors::DomainError;

use super::repository::{CommentQuery, CommentRepository, SortOrder};

/// In-memory comment repository
pub struct MockCommentRepository {
    comments: Arc<RwLock<HashMap<Uuid, Comment>>>,
}

impl MockCommentRepository {
    /// Create a new mock repository
    pub fn new() -> Self {
        Self {
            comments: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MockCommentRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CommentRepository for MockCommentRepository {
    async fn create(&self, comment: Comment) -> Result<Comment, DomainError> {
        let mut comments = self.comments.write().await;
        comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, DomainError> {
        let comments = self.comments.read().await;
        Ok(comments.get(&id).cloned())
    }

    async fn update(&self, comment: Comment) -> Result<Comment, DomainError> {
        let mut comments = self.comments.write().await;
        if !comments.contains_key(&comment.id) {
            return Err(DomainError::not_found("Comment"));
        }
        comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut comments = self.comments.write().await;
        Ok(comments.remove(&id).is_some())
    }

    async fn list(&self, query: &CommentQuery) -> Result<(Vec<Comment>, u64), DomainError> {
        let comments = self.comments.read().await;
        let mut matching: Vec<Comment> = comments
            .values()
            .filter(|c| query.video_id.map_or(true, |v| c.video_id == v))
            .filter(|c| query.author_id.map_or(true, |a| c.author_id == a))
            .cloned()
            .collect();

        match query.sort {
            SortOrder::Asc => matching.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
            SortOrder::Desc => matching.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        }

        let total = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(query.page.offset() as usize)
            .take(query.page.limit as usize)
            .collect();
        Ok((page, total))
    }
}
