//! Presence report for a set of variables, without their values.

use std::fmt;

use serde::Serialize;

use crate::{
    env::{ReadOptions, read_var},
    source::EnvSource,
};

/// State of one variable under its read policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum VarStatus {
    /// Present with a non-empty value.
    Set,
    /// Present and empty, and the policy accepts that.
    Empty,
    /// Absent, and the policy accepts that.
    Unset,
    /// The policy rejects the current state.
    Invalid {
        /// The error a read would fail with.
        message: String,
    },
}

impl fmt::Display for VarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VarStatus::Set => f.write_str("set"),
            VarStatus::Empty => f.write_str("empty"),
            VarStatus::Unset => f.write_str("unset"),
            VarStatus::Invalid { message } => write!(f, "invalid ({message})"),
        }
    }
}

/// One line of a [`report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarReport {
    /// Variable name.
    pub name: String,
    /// Whether the policy requires the variable.
    pub required: bool,
    /// Observed state.
    #[serde(flatten)]
    pub status: VarStatus,
}

/// Checks every `(name, options)` pair against `env`, in order.
pub fn report<E>(env: &E, vars: &[(&str, ReadOptions)]) -> Vec<VarReport>
where
    E: EnvSource + ?Sized,
{
    vars.iter()
        .map(|&(name, options)| {
            let status = match read_var(env, name, options) {
                Ok(None) => VarStatus::Unset,
                Ok(Some(v)) if v.is_empty() => VarStatus::Empty,
                Ok(Some(_)) => VarStatus::Set,
                Err(e) => VarStatus::Invalid {
                    message: e.to_string(),
                },
            };
            VarReport {
                name: name.to_string(),
                required: options.is_required,
                status,
            }
        })
        .collect()
}
