use std::io::Write;
use std::iter;

use anyhow::{Context, Result};
use rusqlite::Connection;

use super::menu::MenuAction;
use super::prompt::{ask, Choice, Prompter, Question};
use super::table::{departments_table, employees_table, roles_table};
use crate::db::{
    fetch_employees, fetch_roles, insert_department, insert_employee, insert_role,
    list_departments, list_employees, list_roles, update_employee_role,
};

const MENU_MESSAGE: &str = "What would you like to do?";

/// What the loop does after one pass through the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Show the main menu again.
    Continue,
    /// The user chose Exit.
    Exit,
}

/// The command loop. Owns the only store connection, the prompter that
/// collects answers and the sink that receives every message and table.
pub struct App<P, W> {
    conn: Connection,
    prompter: P,
    out: W,
}

impl<P: Prompter, W: Write> App<P, W> {
    pub fn new(conn: Connection, prompter: P, out: W) -> Self {
        Self {
            conn,
            prompter,
            out,
        }
    }

    /// Borrow the store connection, e.g. to inspect state between steps.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Borrow the output sink.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Run menu passes until the user exits, then close the connection.
    ///
    /// Any error ends the loop immediately; the connection is then released
    /// when `self` is dropped.
    pub fn run(mut self) -> Result<()> {
        while self.step()? == Flow::Continue {}
        self.close()
    }

    /// Show the main menu once and carry out the chosen action.
    pub fn step(&mut self) -> Result<Flow> {
        let labels = MenuAction::labels();
        let index = self.prompter.select(MENU_MESSAGE, &labels)?;

        let Some(action) = MenuAction::from_index(index) else {
            tracing::warn!(index, "menu selection out of range");
            self.say("Invalid action")?;
            return Ok(Flow::Continue);
        };
        tracing::debug!(?action, "dispatching menu action");

        match action {
            MenuAction::ViewDepartments => self.view_departments()?,
            MenuAction::ViewRoles => self.view_roles()?,
            MenuAction::ViewEmployees => self.view_employees()?,
            MenuAction::AddDepartment => self.add_department()?,
            MenuAction::AddRole => self.add_role()?,
            MenuAction::AddEmployee => self.add_employee()?,
            MenuAction::UpdateEmployeeRole => self.update_employee_role()?,
            MenuAction::Exit => return Ok(Flow::Exit),
        }

        Ok(Flow::Continue)
    }

    fn close(self) -> Result<()> {
        let App { conn, mut out, .. } = self;
        out.flush().context("failed to flush output")?;
        conn.close()
            .map_err(|(_, err)| err)
            .context("failed to close database connection")?;
        tracing::debug!("store connection closed");
        Ok(())
    }

    /// Every write to the sink goes through here.
    fn emit(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .context("failed to write output")
    }

    fn say(&mut self, message: &str) -> Result<()> {
        self.emit(&format!("{message}\n"))
    }

    fn view_departments(&mut self) -> Result<()> {
        let departments = list_departments(&self.conn)?;
        if departments.is_empty() {
            return self.say("No departments found.");
        }
        self.emit(&departments_table(&departments).render())
    }

    fn view_roles(&mut self) -> Result<()> {
        let roles = list_roles(&self.conn)?;
        if roles.is_empty() {
            return self.say("No roles found.");
        }
        self.emit(&roles_table(&roles).render())
    }

    fn view_employees(&mut self) -> Result<()> {
        let employees = list_employees(&self.conn)?;
        if employees.is_empty() {
            return self.say("No employees found.");
        }
        self.emit(&employees_table(&employees).render())
    }

    fn add_department(&mut self) -> Result<()> {
        let answers = ask(
            &mut self.prompter,
            &[Question::input(
                "dept_name",
                "What is the name of the department?",
            )],
        )?;
        let name = answers.text("dept_name")?;

        insert_department(&self.conn, name)?;
        self.say(&format!("Department added: {name}"))
    }

    fn add_role(&mut self) -> Result<()> {
        let departments = list_departments(&self.conn)?;
        if departments.is_empty() {
            return self.say("No departments found.");
        }

        let department_choices = departments
            .iter()
            .map(|dept| Choice::id(dept.name.clone(), dept.id))
            .collect();
        let answers = ask(
            &mut self.prompter,
            &[
                Question::input("title", "What is the title of the role?"),
                Question::input("salary", "What is the salary for this role?"),
                Question::list(
                    "department_id",
                    "Which department does this role belong to?",
                    department_choices,
                ),
            ],
        )?;
        let title = answers.text("title")?;

        insert_role(
            &self.conn,
            title,
            answers.text("salary")?,
            answers.id("department_id")?,
        )?;
        self.say(&format!("Role added: {title}"))
    }

    fn add_employee(&mut self) -> Result<()> {
        let roles = fetch_roles(&self.conn)?;
        let managers = fetch_employees(&self.conn)?;
        if roles.is_empty() {
            return self.say("No roles found.");
        }

        let role_choices = roles
            .iter()
            .map(|role| Choice::id(role.title.clone(), role.id))
            .collect();
        let manager_choices = managers
            .iter()
            .map(|manager| Choice::id(manager.full_name(), manager.id))
            .chain(iter::once(Choice::absent("None")))
            .collect();
        let answers = ask(
            &mut self.prompter,
            &[
                Question::input("first_name", "What is the first name of the employee?"),
                Question::input("last_name", "What is the last name of the employee?"),
                Question::list("role_id", "What is the role of the employee?", role_choices),
                Question::list(
                    "manager_id",
                    "Who is the manager of the employee?",
                    manager_choices,
                ),
            ],
        )?;
        let first_name = answers.text("first_name")?;
        let last_name = answers.text("last_name")?;

        insert_employee(
            &self.conn,
            first_name,
            last_name,
            answers.id("role_id")?,
            answers.optional_id("manager_id")?,
        )?;
        self.say(&format!("Employee added: {first_name} {last_name}"))
    }

    fn update_employee_role(&mut self) -> Result<()> {
        let employees = fetch_employees(&self.conn)?;
        if employees.is_empty() {
            return self.say("No employees found.");
        }
        let employee_choices = employees
            .iter()
            .map(|emp| Choice::id(emp.full_name(), emp.id))
            .collect();

        let roles = fetch_roles(&self.conn)?;
        if roles.is_empty() {
            return self.say("No roles found.");
        }
        let role_choices = roles
            .iter()
            .map(|role| Choice::id(role.title.clone(), role.id))
            .collect();

        let answers = ask(
            &mut self.prompter,
            &[
                Question::list(
                    "employee_id",
                    "Which employee's role do you want to update?",
                    employee_choices,
                ),
                Question::list(
                    "role_id",
                    "What is the new role of the employee?",
                    role_choices,
                ),
            ],
        )?;

        update_employee_role(&self.conn, answers.id("employee_id")?, answers.id("role_id")?)?;
        self.say("Employee role updated")
    }
}
