/// Source of the password assigned to newly created users
use crate::config::AUTO_GEN_PASSWORD_ENV;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordSource {
    /// Same value for every user
    Fixed(String),
    /// Read from the named environment variable on each create; empty when unset
    Env(String),
}

impl PasswordSource {
    /// Configured value if any, otherwise `ENV_AUTO_GEN_PWD`
    pub fn from_config(configured: Option<String>) -> Self {
        match configured {
            Some(password) => Self::Fixed(password),
            None => Self::Env(AUTO_GEN_PASSWORD_ENV.to_string()),
        }
    }

    pub fn resolve(&self) -> String {
        match self {
            Self::Fixed(password) => password.clone(),
            Self::Env(var) => std::env::var(var).unwrap_or_default(),
        }
    }
}

impl Default for PasswordSource {
    fn default() -> Self {
        Self::from_config(None)
    }
}
