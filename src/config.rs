//! Store settings, read once from the environment before the menu is shown.

use std::fmt;
use std::path::{Path, PathBuf};

use directories::BaseDirs;

use crate::error::ConfigError;

/// Folder name used beneath the user's home directory when `DB_HOST` is unset.
const DEFAULT_DATA_DIR: &str = ".employee-tracker";
/// Extension appended to `DB_NAME` to form the SQLite file name.
const DB_FILE_EXTENSION: &str = "sqlite";

/// Connection settings for the relational store.
///
/// SQLite has no notion of users, so `user` and `password` are carried only so
/// the same four settings work unchanged across deployments.
#[derive(Clone)]
pub struct StoreConfig {
    /// Directory hosting the database file.
    pub host: PathBuf,
    pub user: Option<String>,
    pub password: Option<String>,
    /// Database name; the file is `<host>/<database>.sqlite`.
    pub database: String,
}

impl StoreConfig {
    /// Read `DB_HOST`, `DB_USER`, `DB_PASS` and `DB_NAME` from the process
    /// environment. Call [`load_dotenv`] first so `.env` values are visible.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the settings from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let database = read("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;
        let database = database.trim().to_string();
        if database.contains(['/', '\\']) || database == "." || database == ".." {
            return Err(ConfigError::Invalid {
                key: "DB_NAME",
                reason: format!("'{database}' must be a plain name, not a path"),
            });
        }

        let host = match read("DB_HOST") {
            Some(host) => PathBuf::from(host.trim()),
            None => default_host()?,
        };

        Ok(Self {
            host,
            user: read("DB_USER"),
            password: read("DB_PASS"),
            database,
        })
    }

    /// Absolute or host-relative path to the SQLite file.
    pub fn db_path(&self) -> PathBuf {
        self.host.join(format!("{}.{DB_FILE_EXTENSION}", self.database))
    }
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("database", &self.database)
            .finish()
    }
}

/// Merge `.env` from the working directory (or a parent) into the process
/// environment. Variables already set win. Returns the file that was loaded.
pub fn load_dotenv() -> Option<PathBuf> {
    dotenvy::dotenv().ok()
}

/// Same as [`load_dotenv`] for an explicit file.
pub fn load_dotenv_from(path: &Path) -> Option<PathBuf> {
    dotenvy::from_path(path).ok().map(|()| path.to_path_buf())
}

fn default_host() -> Result<PathBuf, ConfigError> {
    let base_dirs = BaseDirs::new().ok_or(ConfigError::NoHomeDirectory)?;
    Ok(base_dirs.home_dir().join(DEFAULT_DATA_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn missing_database_name_is_rejected() {
        let err = StoreConfig::from_lookup(lookup(&[("DB_HOST", "/tmp")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DB_NAME")));
    }

    #[test]
    fn blank_database_name_counts_as_missing() {
        let err = StoreConfig::from_lookup(lookup(&[("DB_NAME", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DB_NAME")));
    }

    #[test]
    fn database_name_with_path_is_invalid() {
        let err = StoreConfig::from_lookup(lookup(&[("DB_HOST", "/tmp"), ("DB_NAME", "../x")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DB_NAME", .. }));
    }

    #[test]
    fn db_path_joins_host_and_name() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("DB_HOST", "/var/lib/tracker"),
            ("DB_USER", "root"),
            ("DB_PASS", "hunter2"),
            ("DB_NAME", "employees_db"),
        ]))
        .unwrap();

        assert_eq!(
            config.db_path(),
            PathBuf::from("/var/lib/tracker/employees_db.sqlite")
        );
        assert_eq!(config.user.as_deref(), Some("root"));
    }

    #[test]
    fn debug_output_redacts_password() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("DB_HOST", "/tmp"),
            ("DB_PASS", "hunter2"),
            ("DB_NAME", "employees_db"),
        ]))
        .unwrap();

        let rendered = format!("{config:?}");
        assert!(!rendered.contains("hunter2"));
        assert!(rendered.contains("<redacted>"));
    }
}
