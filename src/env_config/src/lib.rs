//! Environment configuration accessors.
//!
//! - [`env::read_var`] reads one variable under a [`env::ReadOptions`]
//!   policy (required or optional, empty allowed or not).
//! - [`server_url::resolve_server_url`] picks the public base URL from
//!   `SERVER_URL`, falling back to `VERCEL_URL`.
//! - [`settings::Settings`] loads the application's variables at startup.
//!
//! All of them read through an [`source::EnvSource`], so tests can supply a
//! [`source::MapEnv`] instead of mutating the process environment.

pub mod env;
pub mod error;
pub mod report;
pub mod server_url;
pub mod settings;
pub mod source;
pub mod vars;

pub use env::{ReadOptions, get_env_var, get_env_var_with, read_var};
pub use error::ConfigError;
pub use server_url::resolve_server_url;
pub use source::{EnvSource, MapEnv, SystemEnv};
