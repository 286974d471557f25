//! Sources of environment variables.
//!
//! Readers in this crate never call `std::env` directly. They take an
//! [`EnvSource`], which is [`SystemEnv`] in production and usually a
//! [`MapEnv`] in tests, so the decision logic can be exercised without
//! touching process state.
//!
//! ```
//! use env_config::source::{EnvSource, MapEnv};
//!
//! let env = MapEnv::new().with("SMTP_FROM", "noreply@example.com");
//! assert_eq!(env.get("SMTP_FROM").as_deref(), Some("noreply@example.com"));
//! assert_eq!(env.get("SMTP_PORT"), None);
//! ```

use std::sync::Arc;

use indexmap::IndexMap;

/// Read-only lookup of environment variables by name.
///
/// `None` means the variable is absent. An explicitly empty variable is
/// `Some("")`; the distinction matters to [`crate::env::read_var`].
pub trait EnvSource: Send + Sync {
    /// Returns the value of `name`, or `None` if it is not set.
    fn get(&self, name: &str) -> Option<String>;
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

impl<T: EnvSource + ?Sized> EnvSource for Arc<T> {
    fn get(&self, name: &str) -> Option<String> {
        (**self).get(name)
    }
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl EnvSource for SystemEnv {
    fn get(&self, name: &str) -> Option<String> {
        // Values that are not valid unicode are treated as absent.
        std::env::var(name).ok()
    }
}

/// An in-memory environment.
///
/// Insertion order is preserved, which keeps `Debug` output stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: IndexMap<String, String>,
}

impl MapEnv {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the environment with `name` set to `value`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets `name` to `value`, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    /// Removes `name`, returning its previous value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.shift_remove(name)
    }

    /// Number of variables set.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables are set.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for MapEnv {
    fn get(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = MapEnv::new();
        for (k, v) in iter {
            env.set(k, v);
        }
        env
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_absent_are_distinct() {
        let env = MapEnv::new().with("DISABLE_SSO", "");
        assert_eq!(env.get("DISABLE_SSO").as_deref(), Some(""));
        assert_eq!(env.get("SMTP_PORT"), None);
    }

    #[test]
    fn set_replaces_and_remove_clears() {
        let mut env: MapEnv = [("SMTP_PORT", "25")].into_iter().collect();
        env.set("SMTP_PORT", "587");
        assert_eq!(env.get("SMTP_PORT").as_deref(), Some("587"));
        assert_eq!(env.len(), 1);

        assert_eq!(env.remove("SMTP_PORT").as_deref(), Some("587"));
        assert!(env.is_empty());
        assert_eq!(env.get("SMTP_PORT"), None);
    }

    #[test]
    fn shared_sources_delegate() {
        let env = Arc::new(MapEnv::new().with("ADMIN_EMAIL", "ops@example.com"));
        let by_ref = &env;
        assert_eq!(by_ref.get("ADMIN_EMAIL").as_deref(), Some("ops@example.com"));
    }
}
