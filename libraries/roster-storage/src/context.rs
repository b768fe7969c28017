use crate::users::{self, UserTable};
use async_trait::async_trait;
use roster_core::{error::Result, traits::UserStore, types::UserRecord};

/// In-memory storage context
///
/// Owns its tables; dropping the context drops every record.
#[derive(Debug, Default)]
pub struct InMemoryStorageContext {
    users: UserTable,
}

impl InMemoryStorageContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users
    pub fn user_count(&self) -> Result<usize> {
        Ok(users::count(&self.users)?)
    }
}

#[async_trait]
impl UserStore for InMemoryStorageContext {
    async fn get_user(&self, email: &str) -> Result<Option<UserRecord>> {
        Ok(users::get_by_email(&self.users, email)?)
    }

    async fn insert_user(&self, user: UserRecord) -> Result<()> {
        let email = user.email.clone();
        users::insert(&self.users, user)?;
        tracing::debug!("Stored user {}", email);
        Ok(())
    }
}
