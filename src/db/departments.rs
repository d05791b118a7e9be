use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::models::Department;

/// Retrieve every department in creation order.
pub fn list_departments(conn: &Connection) -> Result<Vec<Department>> {
    tracing::debug!("listing departments");
    let mut stmt = conn
        .prepare("SELECT id, name FROM department ORDER BY id")
        .context("failed to prepare department query")?;

    let departments = stmt
        .query_map([], |row| {
            Ok(Department {
                id: row.get(0)?,
                name: row.get(1)?,
            })
        })
        .context("failed to load departments")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect departments")?;

    Ok(departments)
}

/// Insert a department and return its store-assigned id.
pub fn insert_department(conn: &Connection, name: &str) -> Result<i64> {
    conn.execute("INSERT INTO department (name) VALUES (?1)", params![name])
        .with_context(|| format!("failed to insert department '{name}'"))?;

    let id = conn.last_insert_rowid();
    tracing::info!(id, name, "department inserted");
    Ok(id)
}
