//! Names of the variables the application reads.

use crate::env::ReadOptions;

/// Canonical public base URL, including the protocol.
pub const SERVER_URL: &str = "SERVER_URL";
/// Deployment host provided by the hosting platform, without a protocol.
pub const VERCEL_URL: &str = "VERCEL_URL";
/// Address that receives administrative mail.
pub const ADMIN_EMAIL: &str = "ADMIN_EMAIL";
/// Pooled database connection string.
pub const DATABASE_URL: &str = "DATABASE_URL";
/// Direct (non-pooled) database connection string, used for migrations.
pub const DIRECT_URL: &str = "DIRECT_URL";
/// Key used to sign session cookies.
pub const SESSION_SECRET: &str = "SESSION_SECRET";
/// Signing secret for incoming Stripe webhooks.
pub const STRIPE_WEBHOOK_ENDPOINT_SECRET: &str = "STRIPE_WEBHOOK_ENDPOINT_SECRET";
/// SMTP server port.
pub const SMTP_PORT: &str = "SMTP_PORT";
/// Sender address for outgoing mail.
pub const SMTP_FROM: &str = "SMTP_FROM";
/// Turns off single sign-on when present.
pub const DISABLE_SSO: &str = "DISABLE_SSO";

/// Every application variable with the policy it is read with at startup.
///
/// `SERVER_URL` and `VERCEL_URL` are listed as optional because neither is
/// required on its own; see [`crate::server_url::resolve_server_url`].
pub const KNOWN_VARS: &[(&str, ReadOptions)] = &[
    (SERVER_URL, OPTIONAL),
    (VERCEL_URL, OPTIONAL),
    (ADMIN_EMAIL, REQUIRED),
    (DATABASE_URL, REQUIRED),
    (DIRECT_URL, OPTIONAL),
    (SESSION_SECRET, REQUIRED),
    (STRIPE_WEBHOOK_ENDPOINT_SECRET, OPTIONAL),
    (SMTP_PORT, OPTIONAL),
    (SMTP_FROM, OPTIONAL),
    (DISABLE_SSO, PRESENCE_FLAG),
];

const REQUIRED: ReadOptions = ReadOptions {
    is_required: true,
    allow_empty: false,
};

const OPTIONAL: ReadOptions = ReadOptions {
    is_required: false,
    allow_empty: false,
};

/// Optional, and an explicit empty value counts as set.
const PRESENCE_FLAG: ReadOptions = ReadOptions {
    is_required: false,
    allow_empty: true,
};
