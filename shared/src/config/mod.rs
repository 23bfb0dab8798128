//! Typed application configuration
//!
//! Each section is loaded from environment variables with sensible development
//! defaults, following a `from_env()` + `Default` pattern so binaries can boot
//! without a fully provisioned environment.

pub mod auth;
pub mod database;
pub mod media;
pub mod server;

pub use auth::{AuthConfig, CookieConfig, JwtConfig};
pub use database::DatabaseConfig;
pub use media::MediaConfig;
pub use server::ServerConfig;

/// Complete application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub media: MediaConfig,
}

impl AppConfig {
    /// Assemble every section from the environment
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            media: MediaConfig::from_env(),
        }
    }
}
