//! Row types that mirror the three tables and the two joined listings. They
//! are plain data holders: each one lives only as long as the query result it
//! was read from.

#[derive(Debug, Clone, PartialEq)]
/// A row of the `department` table.
pub struct Department {
    /// Store-assigned primary key, offered as the value behind department
    /// choices when adding a role.
    pub id: i64,
    /// Display name; unique in the schema.
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
/// A row of the `role` table, used to populate role choice lists.
pub struct Role {
    pub id: i64,
    /// Label shown in role choice lists.
    pub title: String,
    /// Stored as `REAL`. The user types it as free text and SQLite performs
    /// the conversion on insert.
    pub salary: f64,
    /// Required reference to `department.id`, enforced by the store.
    pub department_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
/// A role joined to the name of its department, as shown by "View All Roles".
pub struct RoleListing {
    pub id: i64,
    pub title: String,
    /// Name of the department the role belongs to. The listing uses an inner
    /// join, so this is always present.
    pub department: String,
    pub salary: f64,
}

#[derive(Debug, Clone, PartialEq)]
/// A row of the `employee` table.
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Nullable in the schema. Rows created through the menu always carry a
    /// role, but rows written by other tools may not.
    pub role_id: Option<i64>,
    /// Self-reference to another employee. `None` marks top-level staff and is
    /// what the "None" manager choice stores.
    pub manager_id: Option<i64>,
}

impl Employee {
    /// `First Last`, the label used wherever an employee is picked from a list.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
/// An employee with role, department and manager resolved through left joins.
/// Any link may be missing, so every joined column is optional.
pub struct EmployeeListing {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// Role title, `None` when the employee has no role.
    pub title: Option<String>,
    /// Department of the employee's role.
    pub department: Option<String>,
    /// Salary of the employee's role.
    pub salary: Option<f64>,
    /// Manager's full name, `None` for top-level staff.
    pub manager: Option<String>,
}
