//! Resolution of the public base URL of the running instance.

use crate::{
    env::optional_var,
    error::ConfigError,
    source::EnvSource,
    vars::{SERVER_URL, VERCEL_URL},
};

/// Resolves the externally reachable base URL.
///
/// `SERVER_URL` wins whenever it is set to a non-empty value and is returned
/// unchanged; it is expected to carry its own protocol. Otherwise the
/// platform-provided `VERCEL_URL` host is used with an `https://` prefix.
/// Empty values count as unset.
///
/// Fails with `"SERVER_URL is not set"` when neither yields a value, so the
/// error points at the variable operators are expected to configure.
///
/// ```
/// use env_config::{server_url::resolve_server_url, source::MapEnv};
///
/// let env = MapEnv::new().with("VERCEL_URL", "my-app.vercel.app");
/// assert_eq!(resolve_server_url(&env).unwrap(), "https://my-app.vercel.app");
/// ```
pub fn resolve_server_url<E>(env: &E) -> Result<String, ConfigError>
where
    E: EnvSource + ?Sized,
{
    if let Some(url) = optional_var(env, SERVER_URL).filter(|v| !v.is_empty()) {
        return Ok(url);
    }

    if let Some(host) = optional_var(env, VERCEL_URL).filter(|v| !v.is_empty()) {
        return Ok(format!("https://{host}"));
    }

    Err(ConfigError::not_set(SERVER_URL))
}
