/// Shared application state
use crate::services::{PasswordSource, UserHandler, UserService};
use roster_storage::InMemoryStorageContext;
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserHandler>,
}

impl AppState {
    pub fn new(users: Arc<dyn UserHandler>) -> Self {
        Self { users }
    }

    /// State backed by a fresh in-memory store
    pub fn in_memory(password: PasswordSource) -> Self {
        let service = UserService::new(InMemoryStorageContext::new(), password);
        Self::new(Arc::new(service))
    }
}
