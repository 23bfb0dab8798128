//! HTTP client for the third-party media host.
//!
//! Pushes locally staged files to the provider's upload endpoint and returns
//! the hosted URL (plus duration for video assets). Transport and provider
//! failures surface as `Internal` errors; nothing is persisted on our side
//! when an upload fails.

use async_trait::async_trait;
use reqwest::multipart;
use serde::Deserialize;

use vs_core::errors::{DomainError, DomainResult};
use vs_core::services::media::{MediaStorage, UploadedMedia};
use vs_shared::config::MediaConfig;

/// Upload response returned by the media host
#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
    #[serde(default)]
    duration: Option<f64>,
}

/// reqwest-based media storage client
pub struct CloudMediaStorage {
    client: reqwest::Client,
    config: MediaConfig,
}

impl CloudMediaStorage {
    /// Create a new client from the media configuration
    pub fn new(config: MediaConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }
}

#[async_trait]
impl MediaStorage for CloudMediaStorage {
    async fn upload(&self, local_path: &str) -> DomainResult<UploadedMedia> {
        if !self.config.is_configured() {
            return Err(DomainError::internal("Media host is not configured"));
        }

        let bytes = tokio::fs::read(local_path)
            .await
            .map_err(|e| DomainError::internal(format!("Failed to read staged file: {}", e)))?;

        let file_name = local_path
            .rsplit('/')
            .next()
            .unwrap_or("upload")
            .to_string();
        let form = multipart::Form::new()
            .text("cloud_name", self.config.cloud_name.clone())
            .part("file", multipart::Part::bytes(bytes).file_name(file_name));

        let response = self
            .client
            .post(&self.config.upload_url)
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .multipart(form)
            .send()
            .await
            .map_err(|e| DomainError::internal(format!("Media upload failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(%status, "media host rejected upload");
            return Err(DomainError::internal(format!(
                "Media host rejected upload with status {}",
                status
            )));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| DomainError::internal(format!("Invalid media host response: {}", e)))?;

        // Staged files are transient; removal failures are not actionable.
        let _ = tokio::fs::remove_file(local_path).await;

        Ok(UploadedMedia {
            url: body.secure_url,
            duration_secs: body.duration,
        })
    }

    async fn delete(&self, url: &str) -> DomainResult<()> {
        if !self.config.is_configured() {
            return Ok(());
        }

        let response = self
            .client
            .delete(&self.config.upload_url)
            .basic_auth(&self.config.api_key, Some(&self.config.api_secret))
            .query(&[("url", url)])
            .send()
            .await
            .map_err(|e| DomainError::internal(format!("Media delete failed: {}", e)))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "media host rejected delete");
        }
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "cloud"
    }
}
