use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::models::{Role, RoleListing};

/// Roles joined to their department name. Roles whose department has gone
/// missing are not shown.
pub fn list_roles(conn: &Connection) -> Result<Vec<RoleListing>> {
    tracing::debug!("listing roles");
    let mut stmt = conn
        .prepare(
            "SELECT role.id, role.title, department.name, role.salary
             FROM role
             INNER JOIN department ON role.department_id = department.id
             ORDER BY role.id",
        )
        .context("failed to prepare role listing query")?;

    let roles = stmt
        .query_map([], |row| {
            Ok(RoleListing {
                id: row.get(0)?,
                title: row.get(1)?,
                department: row.get(2)?,
                salary: row.get(3)?,
            })
        })
        .context("failed to load roles")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect roles")?;

    Ok(roles)
}

/// Raw role rows, used to build role choice lists.
pub fn fetch_roles(conn: &Connection) -> Result<Vec<Role>> {
    let mut stmt = conn
        .prepare("SELECT id, title, salary, department_id FROM role ORDER BY id")
        .context("failed to prepare role query")?;

    let roles = stmt
        .query_map([], |row| {
            Ok(Role {
                id: row.get(0)?,
                title: row.get(1)?,
                salary: row.get(2)?,
                department_id: row.get(3)?,
            })
        })
        .context("failed to iterate roles")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect roles")?;

    Ok(roles)
}

/// Insert a role. `salary` is the text the user typed; SQLite converts it to
/// a number or fails the insert.
pub fn insert_role(conn: &Connection, title: &str, salary: &str, department_id: i64) -> Result<i64> {
    conn.execute(
        "INSERT INTO role (title, salary, department_id) VALUES (?1, ?2, ?3)",
        params![title, salary, department_id],
    )
    .with_context(|| format!("failed to insert role '{title}'"))?;

    let id = conn.last_insert_rowid();
    tracing::info!(id, title, department_id, "role inserted");
    Ok(id)
}
