//! Roster Storage
//!
//! In-memory user storage for the Roster request handler.
//!
//! # Architecture
//!
//! - **Process-scoped**: Records live as long as the owning context; nothing
//!   is persisted across restarts
//! - **Vertical Slicing**: Each feature owns its own queries and logic
//! - **Insert-only**: Users are created once and never updated or deleted
//!
//! # Example
//!
//! ```rust
//! use roster_core::{UserRecord, UserStore};
//! use roster_storage::InMemoryStorageContext;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = InMemoryStorageContext::new();
//!
//! storage
//!     .insert_user(UserRecord {
//!         email: "a@b.com".to_string(),
//!         firstname: "A".to_string(),
//!         lastname: "B".to_string(),
//!         age: 30,
//!         password: String::new(),
//!     })
//!     .await?;
//!
//! let user = storage.get_user("a@b.com").await?;
//! assert!(user.is_some());
//! # Ok(())
//! # }
//! ```

mod context;
mod error;

// Vertical slices
pub mod users;

pub use context::InMemoryStorageContext;
pub use error::StorageError;
