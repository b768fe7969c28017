//! User table operations

use crate::error::{Result, StorageError};
use roster_core::types::UserRecord;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::RwLock;

/// Users keyed by email
///
/// Shared across runtime threads by the HTTP host. Inserts are a single
/// entry operation, so two creates for the same email never both succeed.
#[derive(Debug, Default)]
pub struct UserTable {
    rows: RwLock<HashMap<String, UserRecord>>,
}

impl UserTable {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Get a user by email
pub fn get_by_email(table: &UserTable, email: &str) -> Result<Option<UserRecord>> {
    let rows = table
        .rows
        .read()
        .map_err(|e| StorageError::Poisoned(e.to_string()))?;

    Ok(rows.get(email).cloned())
}

/// Insert a user unless the email is already taken
///
/// # Errors
///
/// Returns `StorageError::Duplicate` and leaves the existing row untouched
/// when the email is already present.
pub fn insert(table: &UserTable, user: UserRecord) -> Result<()> {
    let mut rows = table
        .rows
        .write()
        .map_err(|e| StorageError::Poisoned(e.to_string()))?;

    match rows.entry(user.email.clone()) {
        Entry::Occupied(entry) => Err(StorageError::duplicate("User", entry.key().as_str())),
        Entry::Vacant(entry) => {
            entry.insert(user);
            Ok(())
        }
    }
}

/// Count stored users
pub fn count(table: &UserTable) -> Result<usize> {
    let rows = table
        .rows
        .read()
        .map_err(|e| StorageError::Poisoned(e.to_string()))?;

    Ok(rows.len())
}
