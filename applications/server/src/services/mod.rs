/// Server services
pub mod password;
pub mod users;

pub use password::PasswordSource;
pub use users::{UserHandler, UserService};
