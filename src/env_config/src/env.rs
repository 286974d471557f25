//! Reading a single variable with presence and emptiness rules.
//!
//! Every read takes a [`ReadOptions`] with two independent flags:
//! - `is_required` (default `true`): absence is an error.
//! - `allow_empty` (default `false`): a required variable may be `""`.
//!
//! Rules, first match wins:
//! - absent and required: [`ConfigError::NotSet`]
//! - absent and optional: `None`
//! - empty, required, empty not allowed: [`ConfigError::NotSet`]
//! - empty otherwise: `Some("")`
//! - anything else: the raw value

use crate::{
    error::ConfigError,
    source::{EnvSource, SystemEnv},
};

/// Per-call policy for [`read_var`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadOptions {
    /// Whether absence (or a rejected empty value) is an error.
    pub is_required: bool,
    /// Whether a required variable may be an explicit empty string.
    pub allow_empty: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            is_required: true,
            allow_empty: false,
        }
    }
}

impl ReadOptions {
    /// Defaults with `is_required` turned off.
    pub fn optional() -> Self {
        Self::default().required(false)
    }

    /// Sets `is_required`, leaving `allow_empty` as it was.
    pub fn required(self, is_required: bool) -> Self {
        Self {
            is_required,
            ..self
        }
    }

    /// Sets `allow_empty`, leaving `is_required` as it was.
    pub fn allow_empty(self, allow_empty: bool) -> Self {
        Self {
            allow_empty,
            ..self
        }
    }
}

/// Reads `name` from `env` and applies `options`.
///
/// Returns `Ok(None)` only for an optional variable that is absent. Both
/// failure cases produce the same message, `"<name> is not set"`.
pub fn read_var<E>(
    env: &E,
    name: &str,
    options: ReadOptions,
) -> Result<Option<String>, ConfigError>
where
    E: EnvSource + ?Sized,
{
    if options.is_required {
        required_value(env, name, options.allow_empty).map(Some)
    } else {
        Ok(optional_var(env, name))
    }
}

/// Reads a required, non-empty variable.
pub fn require_var<E>(env: &E, name: &str) -> Result<String, ConfigError>
where
    E: EnvSource + ?Sized,
{
    required_value(env, name, false)
}

/// Reads an optional variable. Absent is `None`, empty is `Some("")`.
///
/// Optional reads have no failure case, whatever `allow_empty` would say.
pub fn optional_var<E>(env: &E, name: &str) -> Option<String>
where
    E: EnvSource + ?Sized,
{
    env.get(name)
}

fn required_value<E>(env: &E, name: &str, allow_empty: bool) -> Result<String, ConfigError>
where
    E: EnvSource + ?Sized,
{
    match env.get(name) {
        Some(raw) if allow_empty || !raw.is_empty() => Ok(raw),
        _ => Err(ConfigError::not_set(name)),
    }
}

/// Reads a required variable from the process environment.
pub fn get_env_var(name: &str) -> Result<String, ConfigError> {
    require_var(&SystemEnv, name)
}

/// Reads a variable from the process environment with explicit options.
pub fn get_env_var_with(name: &str, options: ReadOptions) -> Result<Option<String>, ConfigError> {
    read_var(&SystemEnv, name, options)
}
