use anyhow::Result;
use employee_tracker::db::{ensure_schema, list_departments, list_employees, list_roles};
use employee_tracker::ui::{App, Flow};
use employee_tracker::StoreError;
use rusqlite::Connection;
use tempfile::TempDir;

mod support;

use support::{pick, typed, ScriptedPrompter, Step};

fn memory_app(steps: Vec<Step>) -> Result<App<ScriptedPrompter, Vec<u8>>> {
    let conn = Connection::open_in_memory()?;
    ensure_schema(&conn)?;
    Ok(App::new(conn, ScriptedPrompter::new(steps), Vec::new()))
}

/// Run a full session against a file database and return what was printed.
fn run_session(db: &std::path::Path, steps: Vec<Step>) -> Result<String> {
    let conn = Connection::open(db)?;
    ensure_schema(&conn)?;
    let mut out = Vec::new();
    App::new(conn, ScriptedPrompter::new(steps), &mut out).run()?;
    Ok(String::from_utf8(out)?)
}

fn reopen(db: &std::path::Path) -> Result<Connection> {
    let conn = Connection::open(db)?;
    ensure_schema(&conn)?;
    Ok(conn)
}

#[test]
fn view_departments_on_empty_store_reports_none_found() -> Result<()> {
    let tmp = TempDir::new()?;
    let db = tmp.path().join("tracker.sqlite");

    let output = run_session(&db, vec![pick("View All Departments"), pick("Exit")])?;
    assert_eq!(output, "No departments found.\n");
    Ok(())
}

#[test]
fn view_roles_on_empty_store_reports_none_found() -> Result<()> {
    let tmp = TempDir::new()?;
    let db = tmp.path().join("tracker.sqlite");

    let output = run_session(
        &db,
        vec![pick("View All Roles"), pick("View All Employees"), pick("Exit")],
    )?;
    assert_eq!(output, "No roles found.\nNo employees found.\n");
    Ok(())
}

#[test]
fn every_action_returns_to_the_menu() -> Result<()> {
    let mut app = memory_app(vec![
        pick("Add a Department"),
        typed("Engineering"),
        pick("View All Departments"),
        pick("Add a Role"),
        typed("Engineer"),
        typed("90000"),
        pick("Engineering"),
        pick("View All Roles"),
        pick("Add an Employee"),
        typed("Ada"),
        typed("Lovelace"),
        pick("Engineer"),
        pick("None"),
        pick("View All Employees"),
        pick("Update an Employee Role"),
        pick("Ada Lovelace"),
        pick("Engineer"),
        pick("Exit"),
    ])?;

    for _ in 0..7 {
        assert_eq!(app.step()?, Flow::Continue);
    }
    assert_eq!(app.step()?, Flow::Exit);
    Ok(())
}

#[test]
fn invalid_menu_selection_is_reported_and_menu_reshown() -> Result<()> {
    let tmp = TempDir::new()?;
    let db = tmp.path().join("tracker.sqlite");

    let output = run_session(&db, vec![Step::Index(42), pick("Exit")])?;
    assert_eq!(output, "Invalid action\n");
    Ok(())
}

#[test]
fn full_session_adds_and_updates_records() -> Result<()> {
    let tmp = TempDir::new()?;
    let db = tmp.path().join("tracker.sqlite");

    let output = run_session(
        &db,
        vec![
            pick("Add a Department"),
            typed("Engineering"),
            pick("Add a Role"),
            typed("Engineer"),
            typed("90000"),
            pick("Engineering"),
            pick("Add a Role"),
            typed("Senior Engineer"),
            typed("120000"),
            pick("Engineering"),
            pick("Add an Employee"),
            typed("Ada"),
            typed("Lovelace"),
            pick("Engineer"),
            pick("None"),
            pick("Update an Employee Role"),
            pick("Ada Lovelace"),
            pick("Senior Engineer"),
            pick("Exit"),
        ],
    )?;

    assert_eq!(
        output,
        "Department added: Engineering\n\
         Role added: Engineer\n\
         Role added: Senior Engineer\n\
         Employee added: Ada Lovelace\n\
         Employee role updated\n"
    );

    let conn = reopen(&db)?;

    let departments = list_departments(&conn)?;
    assert_eq!(departments.len(), 1);
    assert_eq!(departments[0].name, "Engineering");

    let roles = list_roles(&conn)?;
    assert_eq!(roles[0].title, "Engineer");
    assert_eq!(roles[0].department, "Engineering");
    assert_eq!(roles[0].salary, 90000.0);

    let employees = list_employees(&conn)?;
    assert_eq!(employees.len(), 1);
    assert_eq!(employees[0].first_name, "Ada");
    assert_eq!(employees[0].title.as_deref(), Some("Senior Engineer"));
    assert_eq!(employees[0].manager, None);
    Ok(())
}

#[test]
fn manager_choice_lists_existing_employees() -> Result<()> {
    let mut app = memory_app(vec![
        pick("Add a Department"),
        typed("Engineering"),
        pick("Add a Role"),
        typed("Engineer"),
        typed("90000"),
        pick("Engineering"),
        pick("Add an Employee"),
        typed("Ada"),
        typed("Lovelace"),
        pick("Engineer"),
        pick("None"),
        pick("Add an Employee"),
        typed("Charles"),
        typed("Babbage"),
        pick("Engineer"),
        pick("Ada Lovelace"),
    ])?;

    for _ in 0..4 {
        app.step()?;
    }

    let employees = list_employees(app.connection())?;
    assert_eq!(employees[0].manager, None);
    assert_eq!(employees[1].manager.as_deref(), Some("Ada Lovelace"));
    Ok(())
}

#[test]
fn view_employees_prints_a_table() -> Result<()> {
    let tmp = TempDir::new()?;
    let db = tmp.path().join("tracker.sqlite");

    let output = run_session(
        &db,
        vec![
            pick("Add a Department"),
            typed("Engineering"),
            pick("Add a Role"),
            typed("Engineer"),
            typed("90000"),
            pick("Engineering"),
            pick("Add an Employee"),
            typed("Ada"),
            typed("Lovelace"),
            pick("Engineer"),
            pick("None"),
            pick("View All Employees"),
            pick("Exit"),
        ],
    )?;

    let header = "│ id │ first_name │ last_name │ title    │ department  │ salary │ manager │";
    let row = "│  1 │ Ada        │ Lovelace  │ Engineer │ Engineering │  90000 │         │";
    assert!(output.contains(header), "{output}");
    assert!(output.contains(row), "{output}");
    Ok(())
}

#[test]
fn add_role_without_departments_returns_to_menu() -> Result<()> {
    let tmp = TempDir::new()?;
    let db = tmp.path().join("tracker.sqlite");

    let output = run_session(&db, vec![pick("Add a Role"), pick("Exit")])?;
    assert_eq!(output, "No departments found.\n");
    Ok(())
}

#[test]
fn add_employee_without_roles_returns_to_menu() -> Result<()> {
    let tmp = TempDir::new()?;
    let db = tmp.path().join("tracker.sqlite");

    let output = run_session(&db, vec![pick("Add an Employee"), pick("Exit")])?;
    assert_eq!(output, "No roles found.\n");
    Ok(())
}

#[test]
fn update_without_employees_asks_nothing_further() -> Result<()> {
    let mut app = memory_app(vec![pick("Update an Employee Role")])?;
    assert_eq!(app.step()?, Flow::Continue);
    assert_eq!(app.output().as_slice(), b"No employees found.\n");
    Ok(())
}

#[test]
fn update_without_roles_reports_none_found() -> Result<()> {
    let mut app = memory_app(vec![pick("Update an Employee Role")])?;
    app.connection().execute(
        "INSERT INTO employee (first_name, last_name) VALUES ('Grace', 'Hopper')",
        [],
    )?;

    assert_eq!(app.step()?, Flow::Continue);
    assert_eq!(app.output().as_slice(), b"No roles found.\n");
    Ok(())
}

#[test]
fn store_rejection_aborts_the_session() -> Result<()> {
    let tmp = TempDir::new()?;
    let db = tmp.path().join("tracker.sqlite");

    let result = run_session(
        &db,
        vec![
            pick("Add a Department"),
            typed("Engineering"),
            pick("Add a Role"),
            typed("Engineer"),
            typed("plenty"),
            pick("Engineering"),
            pick("Exit"),
        ],
    );
    assert!(result.is_err());

    let conn = reopen(&db)?;
    assert!(list_roles(&conn)?.is_empty());
    Ok(())
}

#[test]
fn duplicate_department_aborts_the_session() -> Result<()> {
    let mut app = memory_app(vec![
        pick("Add a Department"),
        typed("Sales"),
        pick("Add a Department"),
        typed("Sales"),
    ])?;

    app.step()?;
    assert!(app.step().is_err());
    Ok(())
}

#[test]
fn missing_employee_on_update_is_not_success() -> Result<()> {
    let mut app = memory_app(vec![
        pick("Update an Employee Role"),
        pick("Grace Hopper"),
        pick("Engineer"),
    ])?;
    let conn = app.connection();
    conn.execute("INSERT INTO department (name) VALUES ('Engineering')", [])?;
    conn.execute(
        "INSERT INTO role (title, salary, department_id) VALUES ('Engineer', 1, 1)",
        [],
    )?;
    conn.execute(
        "CREATE TEMP TRIGGER vanish BEFORE UPDATE ON employee
         BEGIN SELECT RAISE(IGNORE); END",
        [],
    )?;
    conn.execute(
        "INSERT INTO employee (first_name, last_name) VALUES ('Grace', 'Hopper')",
        [],
    )?;

    let err = app.step().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<StoreError>(),
        Some(StoreError::EmployeeNotFound(1))
    ));
    Ok(())
}

/// A sink whose every write fails, as a closed stdout would.
struct BrokenPipe;

impl std::io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
        Err(std::io::ErrorKind::BrokenPipe.into())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn broken_app(steps: Vec<Step>) -> Result<App<ScriptedPrompter, BrokenPipe>> {
    let conn = Connection::open_in_memory()?;
    ensure_schema(&conn)?;
    conn.execute("INSERT INTO department (name) VALUES ('Sales')", [])?;
    Ok(App::new(conn, ScriptedPrompter::new(steps), BrokenPipe))
}

#[test]
fn failed_table_write_names_the_output() -> Result<()> {
    let mut app = broken_app(vec![pick("View All Departments")])?;

    let err = app.step().unwrap_err();
    assert_eq!(err.to_string(), "failed to write output");
    Ok(())
}

#[test]
fn failed_invalid_action_write_names_the_output() -> Result<()> {
    let mut app = broken_app(vec![Step::Index(99)])?;

    let err = app.step().unwrap_err();
    assert_eq!(err.to_string(), "failed to write output");
    Ok(())
}
