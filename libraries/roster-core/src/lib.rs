//! Roster Core
//!
//! Domain types, the user store trait and error handling shared by the
//! storage backend and the request handler.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `UserRecord` and the `NewUser` create payload
//! - **Core Traits**: `UserStore`
//! - **Error Handling**: Unified `RosterError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use roster_core::types::NewUser;
//!
//! let new_user = NewUser::from_json(
//!     r#"{"email":"a@b.com","firstname":"A","lastname":"B","age":30}"#,
//! )
//! .unwrap();
//! new_user.validate().unwrap();
//!
//! let record = new_user.into_record("generated".to_string());
//! assert_eq!(record.email, "a@b.com");
//! assert_eq!(record.password, "generated");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{RequiredField, Result, RosterError};
pub use traits::UserStore;
pub use types::{NewUser, UserRecord};
