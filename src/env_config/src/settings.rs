//! Startup configuration snapshot.
//!
//! [`Settings::from_env`] reads every application variable once and fails on
//! the first missing required one. It reads with the same policies that
//! [`crate::vars::KNOWN_VARS`] lists for the report; a test keeps the two in
//! step. Values stay strings; connection strings and signing keys are wrapped
//! in [`SecretString`] so they never show up in `Debug` output.

use secrecy::SecretString;
use snafu::{Backtrace, ResultExt, Snafu};
use tracing::{debug, info};

use crate::{
    env::{optional_var, require_var},
    error::ConfigError,
    server_url::resolve_server_url,
    source::EnvSource,
    vars::{
        ADMIN_EMAIL, DATABASE_URL, DIRECT_URL, DISABLE_SSO, SERVER_URL, SESSION_SECRET, SMTP_FROM,
        SMTP_PORT, STRIPE_WEBHOOK_ENDPOINT_SECRET,
    },
};

/// Errors that can occur while loading [`Settings`].
///
/// Each variant names the settings group that failed; the wrapped
/// [`ConfigError`] names the variable.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum SettingsError {
    /// Public base URL could not be resolved.
    #[snafu(display("failed to load server settings: {source}"))]
    Server {
        source: ConfigError,
        backtrace: Backtrace,
    },

    /// Administrative contact is missing.
    #[snafu(display("failed to load admin settings: {source}"))]
    Admin {
        source: ConfigError,
        backtrace: Backtrace,
    },

    /// Database connection strings are missing.
    #[snafu(display("failed to load database settings: {source}"))]
    Database {
        source: ConfigError,
        backtrace: Backtrace,
    },

    /// Session signing key is missing.
    #[snafu(display("failed to load session settings: {source}"))]
    Session {
        source: ConfigError,
        backtrace: Backtrace,
    },
}

impl SettingsError {
    /// The configuration error underneath the settings group.
    pub fn config_error(&self) -> &ConfigError {
        match self {
            SettingsError::Server { source, .. }
            | SettingsError::Admin { source, .. }
            | SettingsError::Database { source, .. }
            | SettingsError::Session { source, .. } => source,
        }
    }
}

/// Application configuration read at startup.
#[derive(Debug)]
pub struct Settings {
    /// Public base URL, see [`resolve_server_url`].
    pub server_url: String,
    /// `ADMIN_EMAIL`.
    pub admin_email: String,
    /// `DATABASE_URL`.
    pub database_url: SecretString,
    /// `DIRECT_URL`.
    pub direct_url: Option<SecretString>,
    /// `SESSION_SECRET`.
    pub session_secret: SecretString,
    /// `STRIPE_WEBHOOK_ENDPOINT_SECRET`.
    pub stripe_webhook_endpoint_secret: Option<SecretString>,
    /// `SMTP_PORT`, unparsed.
    pub smtp_port: Option<String>,
    /// `SMTP_FROM`.
    pub smtp_from: Option<String>,
    /// `DISABLE_SSO`, possibly empty.
    pub disable_sso: Option<String>,
}

impl Settings {
    /// Loads all settings from `env`.
    ///
    /// Errors:
    /// - `SERVER_URL` and `VERCEL_URL` both unusable
    /// - `ADMIN_EMAIL`, `DATABASE_URL` or `SESSION_SECRET` absent or empty
    pub fn from_env<E>(env: &E) -> Result<Self, SettingsError>
    where
        E: EnvSource + ?Sized,
    {
        let server_url = resolve_server_url(env).context(ServerSnafu)?;
        debug!(variable = SERVER_URL, "resolved public server url");

        let admin_email = required(env, ADMIN_EMAIL).context(AdminSnafu)?;

        let database_url = required(env, DATABASE_URL).context(DatabaseSnafu)?;
        let session_secret = required(env, SESSION_SECRET).context(SessionSnafu)?;

        // Optional reads cannot fail.
        let direct_url = optional(env, DIRECT_URL);
        let smtp_port = optional(env, SMTP_PORT);
        let smtp_from = optional(env, SMTP_FROM);
        let stripe_webhook_endpoint_secret = optional(env, STRIPE_WEBHOOK_ENDPOINT_SECRET);
        let disable_sso = optional(env, DISABLE_SSO);

        let settings = Settings {
            server_url,
            admin_email,
            database_url: SecretString::new(database_url.into()),
            direct_url: direct_url.map(|v| SecretString::new(v.into())),
            session_secret: SecretString::new(session_secret.into()),
            stripe_webhook_endpoint_secret: stripe_webhook_endpoint_secret
                .map(|v| SecretString::new(v.into())),
            smtp_port,
            smtp_from,
            disable_sso,
        };

        info!(
            server_url = %settings.server_url,
            sso_disabled = settings.sso_disabled(),
            "loaded configuration"
        );
        Ok(settings)
    }

    /// Whether `DISABLE_SSO` is present, with any value including `""`.
    pub fn sso_disabled(&self) -> bool {
        self.disable_sso.is_some()
    }
}

fn required<E>(env: &E, name: &str) -> Result<String, ConfigError>
where
    E: EnvSource + ?Sized,
{
    let value = require_var(env, name)?;
    debug!(variable = name, present = true, "read required variable");
    Ok(value)
}

fn optional<E>(env: &E, name: &str) -> Option<String>
where
    E: EnvSource + ?Sized,
{
    let value = optional_var(env, name);
    debug!(variable = name, present = value.is_some(), "read optional variable");
    value
}
