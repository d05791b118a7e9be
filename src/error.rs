//! Typed failures that callers may want to match on. Everything else travels
//! as `anyhow::Error` with query context attached.

use thiserror::Error;

/// Problems with the store settings read at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("could not locate home directory for the default DB_HOST")]
    NoHomeDirectory,
}

/// Store-level outcomes that the database itself does not report as errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Employee {0} not found")]
    EmployeeNotFound(i64),
}
