/// Core traits for Roster
use crate::error::Result;
use crate::types::UserRecord;
use async_trait::async_trait;

/// User store keyed by email
///
/// Implementations must never hold two records with the same email.
/// Records are only ever added; there is no update or delete.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Get a user by email
    async fn get_user(&self, email: &str) -> Result<Option<UserRecord>>;

    /// Insert a user if no record shares its email
    ///
    /// # Errors
    /// Returns `RosterError::AlreadyExists` when the email is taken; the
    /// existing record is left untouched.
    async fn insert_user(&self, user: UserRecord) -> Result<()>;
}
