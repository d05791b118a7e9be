use std::fs;

use anyhow::{Context, Result};
use rusqlite::Connection;

use crate::config::StoreConfig;

/// Open the store described by `config`, creating the host directory and any
/// missing tables. The returned connection is the only one the process uses.
///
/// The three tables are expected to exist already, but a fresh database is
/// bootstrapped with `CREATE TABLE IF NOT EXISTS` (see [`ensure_schema`]).
/// Tables that are already present are never altered and no migration runs.
pub fn open_store(config: &StoreConfig) -> Result<Connection> {
    let db_path = config.db_path();

    fs::create_dir_all(&config.host)
        .with_context(|| format!("failed to create {}", config.host.display()))?;

    tracing::debug!(
        path = %db_path.display(),
        user = config.user.as_deref().unwrap_or("<unset>"),
        "opening store"
    );
    let conn = Connection::open(&db_path)
        .with_context(|| format!("failed to open database {}", db_path.display()))?;

    ensure_schema(&conn)?;
    tracing::info!(path = %db_path.display(), "store ready");
    Ok(conn)
}

/// Switch on foreign keys for this connection and create any table that does
/// not exist yet. Existing tables are left untouched.
///
/// The tables are `STRICT`, so raw text bound to `salary` is either converted
/// losslessly to a number or rejected by SQLite.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])
        .context("failed to enable foreign keys")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS department (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE
        ) STRICT",
        [],
    )
    .context("failed to create department table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS role (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            salary REAL NOT NULL,
            department_id INTEGER NOT NULL,
            FOREIGN KEY(department_id) REFERENCES department(id)
        ) STRICT",
        [],
    )
    .context("failed to create role table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS employee (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            first_name TEXT NOT NULL,
            last_name TEXT NOT NULL,
            role_id INTEGER,
            manager_id INTEGER,
            FOREIGN KEY(role_id) REFERENCES role(id),
            FOREIGN KEY(manager_id) REFERENCES employee(id)
        ) STRICT",
        [],
    )
    .context("failed to create employee table")?;

    Ok(())
}
