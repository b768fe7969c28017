/// Storage-specific errors
use thiserror::Error;

/// Result type alias using `StorageError`
pub type Result<T> = std::result::Result<T, StorageError>;

/// Storage error types
#[derive(Error, Debug)]
pub enum StorageError {
    /// A record with this key already exists
    #[error("{entity} already exists: {id}")]
    Duplicate { entity: String, id: String },

    /// A writer panicked while holding the table lock
    #[error("Table lock poisoned: {0}")]
    Poisoned(String),
}

impl StorageError {
    /// Create a duplicate error
    pub fn duplicate(entity: impl Into<String>, id: impl Into<String>) -> Self {
        Self::Duplicate {
            entity: entity.into(),
            id: id.into(),
        }
    }
}

impl From<StorageError> for roster_core::RosterError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Duplicate { id, .. } => roster_core::RosterError::AlreadyExists(id),
            other => roster_core::RosterError::storage(other.to_string()),
        }
    }
}
