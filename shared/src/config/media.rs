//! Media hosting service configuration

use serde::{Deserialize, Serialize};

/// Credentials and endpoint for the third-party media host
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// Upload endpoint base URL
    pub upload_url: String,

    /// Account/cloud identifier at the provider
    pub cloud_name: String,

    /// API key
    pub api_key: String,

    /// API secret
    pub api_secret: String,
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            upload_url: String::from("https://api.media-host.invalid/v1/upload"),
            cloud_name: String::new(),
            api_key: String::new(),
            api_secret: String::new(),
        }
    }
}

impl MediaConfig {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            upload_url: std::env::var("MEDIA_UPLOAD_URL").unwrap_or(defaults.upload_url),
            cloud_name: std::env::var("MEDIA_CLOUD_NAME").unwrap_or(defaults.cloud_name),
            api_key: std::env::var("MEDIA_API_KEY").unwrap_or(defaults.api_key),
            api_secret: std::env::var("MEDIA_API_SECRET").unwrap_or(defaults.api_secret),
        }
    }

    /// Whether credentials have been provided
    pub fn is_configured(&self) -> bool {
        !self.cloud_name.is_empty() && !self.api_key.is_empty() && !self.api_secret.is_empty()
    }
}
