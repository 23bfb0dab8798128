//! Session repository trait for the single refresh-token slot per user.
//!
//! # Security Considerations
//! - Only token hashes are stored, never raw refresh tokens
//! - Rotation must be a compare-and-swap so concurrent refreshes for the same
//!   user cannot both win
//! - There is no background expiry sweep; stale records become unreachable
//!   once the signed token inside them lapses

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::session::SessionRecord;
use crate::errors::DomainError;

/// Repository trait for SessionRecord persistence operations
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Insert or overwrite the session record for a user
    ///
    /// Overwriting is the single-session policy: any refresh token issued
    /// earlier is silently invalidated by the write.
    async fn upsert(&self, record: SessionRecord) -> Result<SessionRecord, DomainError>;

    /// Fetch the session record for a user, if one exists
    async fn find_by_user(&self, user_id: Uuid) -> Result<Option<SessionRecord>, DomainError>;

    /// Compare-and-swap rotation
    ///
    /// Replaces the stored record only if its token hash still equals
    /// `expected_hash`.
    ///
    /// # Returns
    /// * `Ok(true)` - The swap happened; the presented token won the rotation
    /// * `Ok(false)` - The stored hash no longer matched (token already
    ///   rotated out, or the record is gone)
    async fn rotate(
        &self,
        user_id: Uuid,
        expected_hash: &str,
        replacement: SessionRecord,
    ) -> Result<bool, DomainError>;

    /// Delete the session record for a user
    ///
    /// # Returns
    /// * `Ok(true)` - A record was deleted
    /// * `Ok(false)` - No record existed
    async fn delete(&self, user_id: Uuid) -> Result<bool, DomainError>;
}
