//! Media hosting collaborator interface.
//!
//! Uploading and serving the actual bytes is delegated to a third-party
//! host; the core only ever sees the resulting URLs.

use async_trait::async_trait;

use crate::errors::{DomainError, DomainResult};

/// Result of a successful upload to the media host
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedMedia {
    /// Publicly reachable URL of the hosted asset
    pub url: String,

    /// Duration in seconds, reported for video assets only
    pub duration_secs: Option<f64>,
}

/// External media storage service
///
/// Implementations include the HTTP client in the infra crate and a mock for
/// tests and local development.
#[async_trait]
pub trait MediaStorage: Send + Sync {
    /// Upload a locally staged file and return its hosted location
    ///
    /// The local file is the product of the (out of scope) upload middleware
    /// that staged the request body on disk.
    async fn upload(&self, local_path: &str) -> DomainResult<UploadedMedia>;

    /// Best-effort removal of a hosted asset
    async fn delete(&self, url: &str) -> DomainResult<()> {
        let _ = url;
        Ok(())
    }

    /// Name of the hosting provider, for logs
    fn provider_name(&self) -> &str;
}

/// Mock media storage returning deterministic URLs
pub struct MockMediaStorage;

impl MockMediaStorage {
    /// Create a new mock
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockMediaStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaStorage for MockMediaStorage {
    async fn upload(&self, local_path: &str) -> DomainResult<UploadedMedia> {
        if local_path.trim().is_empty() {
            return Err(DomainError::internal("Upload failed: empty path"));
        }
        let file_name = local_path.rsplit('/').next().unwrap_or(local_path);
        Ok(UploadedMedia {
            url: format!("https://media.test/{}", file_name),
            duration_secs: Some(1.0),
        })
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_upload_uses_file_name() {
        let storage = MockMediaStorage::new();
        let uploaded = storage.upload("/tmp/staging/clip.mp4").await.unwrap();
        assert_eq!(uploaded.url, "https://media.test/clip.mp4");
    }

    #[tokio::test]
    async fn test_mock_upload_rejects_empty_path() {
        let storage = MockMediaStorage::new();
        assert!(storage.upload("  ").await.is_err());
    }
}
