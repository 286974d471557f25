use thiserror::Error;

/// Errors related to application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A variable the application depends on is absent, or set to an empty
    /// string where empty values are not accepted.
    #[error("{0} is not set")]
    NotSet(String),
}

impl ConfigError {
    /// Builds a [`ConfigError::NotSet`] for `name`.
    pub fn not_set(name: impl Into<String>) -> Self {
        ConfigError::NotSet(name.into())
    }

    /// Name of the variable this error is about.
    pub fn variable(&self) -> &str {
        match self {
            ConfigError::NotSet(name) => name,
        }
    }
}
