use anyhow::{Context, Result};
use rusqlite::{params, Connection};

use crate::error::StoreError;
use crate::models::{Employee, EmployeeListing};

/// Every employee with role title, department, salary and manager name. All
/// joins are left joins because any of those links may be absent.
pub fn list_employees(conn: &Connection) -> Result<Vec<EmployeeListing>> {
    tracing::debug!("listing employees");
    let mut stmt = conn
        .prepare(
            "SELECT employee.id, employee.first_name, employee.last_name,
                    role.title, department.name, role.salary,
                    manager.first_name || ' ' || manager.last_name
             FROM employee
             LEFT JOIN role ON employee.role_id = role.id
             LEFT JOIN department ON role.department_id = department.id
             LEFT JOIN employee manager ON employee.manager_id = manager.id
             ORDER BY employee.id",
        )
        .context("failed to prepare employee listing query")?;

    let employees = stmt
        .query_map([], |row| {
            Ok(EmployeeListing {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                title: row.get(3)?,
                department: row.get(4)?,
                salary: row.get(5)?,
                manager: row.get(6)?,
            })
        })
        .context("failed to load employees")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect employees")?;

    Ok(employees)
}

/// Raw employee rows, used for employee and manager choice lists.
pub fn fetch_employees(conn: &Connection) -> Result<Vec<Employee>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, first_name, last_name, role_id, manager_id
             FROM employee
             ORDER BY id",
        )
        .context("failed to prepare employee query")?;

    let employees = stmt
        .query_map([], |row| {
            Ok(Employee {
                id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
                role_id: row.get(3)?,
                manager_id: row.get(4)?,
            })
        })
        .context("failed to iterate employees")?
        .collect::<Result<Vec<_>, _>>()
        .context("failed to collect employees")?;

    Ok(employees)
}

/// Insert an employee. `manager_id` of `None` stores a NULL manager.
pub fn insert_employee(
    conn: &Connection,
    first_name: &str,
    last_name: &str,
    role_id: i64,
    manager_id: Option<i64>,
) -> Result<i64> {
    conn.execute(
        "INSERT INTO employee (first_name, last_name, role_id, manager_id)
         VALUES (?1, ?2, ?3, ?4)",
        params![first_name, last_name, role_id, manager_id],
    )
    .with_context(|| format!("failed to insert employee '{first_name} {last_name}'"))?;

    let id = conn.last_insert_rowid();
    tracing::info!(id, role_id, ?manager_id, "employee inserted");
    Ok(id)
}

/// Point one employee at a new role. Touching zero rows means the employee
/// does not exist, which is reported as an error rather than success.
pub fn update_employee_role(conn: &Connection, employee_id: i64, role_id: i64) -> Result<()> {
    let updated = conn
        .execute(
            "UPDATE employee SET role_id = ?1 WHERE id = ?2",
            params![role_id, employee_id],
        )
        .context("failed to update employee role")?;

    if updated == 0 {
        return Err(StoreError::EmployeeNotFound(employee_id).into());
    }

    tracing::info!(employee_id, role_id, "employee role updated");
    Ok(())
}
