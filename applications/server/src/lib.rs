//! Roster Server Library
//!
//! Proxy-event request handler for user records: method dispatch, user
//! validation and storage, and the JSON response envelope, plus an HTTP host
//! that stands in for the function runtime.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod services;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use dispatch::dispatch;
pub use error::{Result, ServerError};
pub use event::{Message, ProxyRequest, ProxyResponse};
pub use services::{PasswordSource, UserHandler, UserService};
pub use state::AppState;
