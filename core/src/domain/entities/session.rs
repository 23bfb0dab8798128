//! Session record: the single server-held refresh token slot per user.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The persisted session state for one user
///
/// Invariant: at most one record per user. Issuing a new refresh token
/// overwrites the previous record, which silently invalidates the old token
/// even though its signature would still verify. Only the SHA-256 hash of the
/// token is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The user this session belongs to (one record per user)
    pub user_id: Uuid,

    /// SHA-256 hex hash of the currently valid refresh token
    pub token_hash: String,

    /// When the current refresh token was issued
    pub issued_at: DateTime<Utc>,

    /// When the current refresh token expires; after this the record is
    /// unreachable and simply stale (no background reaper exists)
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Creates a new session record for a freshly issued refresh token
    pub fn new(user_id: Uuid, token_hash: String, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            token_hash,
            issued_at: now,
            expires_at: now + Duration::seconds(ttl_seconds),
        }
    }

    /// Checks if the stored token has lapsed
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Constant-time comparison against a presented token's hash
    pub fn matches(&self, token_hash: &str) -> bool {
        constant_time_eq(self.token_hash.as_bytes(), token_hash.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record() {
        let user_id = Uuid::new_v4();
        let record = SessionRecord::new(user_id, "abc123".to_string(), 604_800);

        assert_eq!(record.user_id, user_id);
        assert!(!record.is_expired());
        assert!(record.matches("abc123"));
        assert!(!record.matches("abc124"));
    }

    #[test]
    fn test_expiry() {
        let mut record = SessionRecord::new(Uuid::new_v4(), "h".to_string(), 60);
        record.expires_at = Utc::now() - Duration::seconds(1);
        assert!(record.is_expired());
    }
}
