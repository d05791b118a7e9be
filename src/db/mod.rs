//! Persistence module split across logical submodules. Every function takes
//! the connection by reference; the caller owns it.

mod connection;
mod departments;
mod employees;
mod roles;

pub use connection::{ensure_schema, open_store};
pub use departments::{insert_department, list_departments};
pub use employees::{fetch_employees, insert_employee, list_employees, update_employee_role};
pub use roles::{fetch_roles, insert_role, list_roles};
