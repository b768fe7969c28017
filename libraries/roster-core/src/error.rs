/// Core error types for Roster
use std::fmt;
use thiserror::Error;

/// Result type alias using `RosterError`
pub type Result<T> = std::result::Result<T, RosterError>;

/// Fields a create payload must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredField {
    /// `email`
    Email,
    /// `firstname`
    Firstname,
    /// `lastname`
    Lastname,
    /// `age`
    Age,
}

impl RequiredField {
    /// JSON field name
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredField::Email => "email",
            RequiredField::Firstname => "firstname",
            RequiredField::Lastname => "lastname",
            RequiredField::Age => "age",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Core error type for Roster
///
/// The `Display` output of every client-facing variant is the exact message
/// returned to callers in the response envelope.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// Create body is not a well-formed user payload
    #[error("request is invalid json format")]
    InvalidJson,

    /// A required field is missing or empty
    #[error("{0} is required")]
    MissingField(RequiredField),

    /// No user is registered under the requested email
    #[error("email is not found")]
    NotFound,

    /// A user with this email already exists
    #[error("email {0} is already exists")]
    AlreadyExists(String),

    /// Request method has no handler
    #[error("request http method is not allowed")]
    MethodNotAllowed,

    /// Unconditional failure with no categorized cause
    #[error("do nothing just Error")]
    Unhandled,

    /// Storage backend failure
    #[error("Storage error: {0}")]
    Storage(String),
}

impl RosterError {
    /// Create a storage error
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Whether this error is answered with a 400 envelope rather than
    /// failing the invocation
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Unhandled | Self::Storage(_))
    }
}
