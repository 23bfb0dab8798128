//! Registration input value object.

use serde::{Deserialize, Serialize};

/// Fields required to register a new account
///
/// The password travels in clear text only as far as the credential service,
/// which hashes it before anything is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: Option<String>,
    pub avatar_url: String,
    pub cover_image_url: Option<String>,
}
