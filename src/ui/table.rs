//! Boxed console tables for the three "View All" actions.

use unicode_width::UnicodeWidthStr;

use crate::models::{Department, EmployeeListing, RoleListing};

/// Column alignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Table column definition
#[derive(Debug, Clone)]
pub struct Column {
    pub header: String,
    pub alignment: Alignment,
}

impl Column {
    #[must_use]
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            alignment: Alignment::Left,
        }
    }

    #[must_use]
    pub fn align(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// Table formatter
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

impl Table {
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Add a row to the table. Missing trailing cells render empty and
    /// surplus cells are dropped.
    pub fn add_row(&mut self, cells: Vec<impl Into<String>>) {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.resize(self.columns.len(), String::new());
        self.rows.push(row);
    }

    fn calculate_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .columns
            .iter()
            .map(|col| col.header.width())
            .collect();

        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.width());
            }
        }

        widths
    }

    /// Pad `cell` to `width` terminal columns. Wide characters count double.
    fn format_cell(cell: &str, width: usize, alignment: Alignment) -> String {
        let padding = width.saturating_sub(cell.width());
        match alignment {
            Alignment::Left => format!("{cell}{}", " ".repeat(padding)),
            Alignment::Right => format!("{}{cell}", " ".repeat(padding)),
        }
    }

    fn border(widths: &[usize], left: char, join: char, right: char) -> String {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(&join.to_string()))
    }

    fn line(cells: impl Iterator<Item = String>) -> String {
        let cells: Vec<String> = cells.map(|cell| format!(" {cell} ")).collect();
        format!("│{}│", cells.join("│"))
    }

    /// Render the table as a string, one trailing newline included.
    #[must_use]
    pub fn render(&self) -> String {
        let widths = self.calculate_widths();
        let mut output = String::new();

        output.push_str(&Self::border(&widths, '┌', '┬', '┐'));
        output.push('\n');

        let header = self
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, width)| Self::format_cell(&col.header, *width, Alignment::Left));
        output.push_str(&Self::line(header));
        output.push('\n');

        output.push_str(&Self::border(&widths, '├', '┼', '┤'));
        output.push('\n');

        for row in &self.rows {
            let cells = row
                .iter()
                .zip(self.columns.iter().zip(&widths))
                .map(|(cell, (col, width))| Self::format_cell(cell, *width, col.alignment));
            output.push_str(&Self::line(cells));
            output.push('\n');
        }

        output.push_str(&Self::border(&widths, '└', '┴', '┘'));
        output.push('\n');
        output
    }
}

fn salary_cell(salary: f64) -> String {
    salary.to_string()
}

pub fn departments_table(departments: &[Department]) -> Table {
    let mut table = Table::new(vec![
        Column::new("id").align(Alignment::Right),
        Column::new("name"),
    ]);
    for department in departments {
        table.add_row(vec![department.id.to_string(), department.name.clone()]);
    }
    table
}

pub fn roles_table(roles: &[RoleListing]) -> Table {
    let mut table = Table::new(vec![
        Column::new("id").align(Alignment::Right),
        Column::new("title"),
        Column::new("department"),
        Column::new("salary").align(Alignment::Right),
    ]);
    for role in roles {
        table.add_row(vec![
            role.id.to_string(),
            role.title.clone(),
            role.department.clone(),
            salary_cell(role.salary),
        ]);
    }
    table
}

pub fn employees_table(employees: &[EmployeeListing]) -> Table {
    let mut table = Table::new(vec![
        Column::new("id").align(Alignment::Right),
        Column::new("first_name"),
        Column::new("last_name"),
        Column::new("title"),
        Column::new("department"),
        Column::new("salary").align(Alignment::Right),
        Column::new("manager"),
    ]);
    for employee in employees {
        table.add_row(vec![
            employee.id.to_string(),
            employee.first_name.clone(),
            employee.last_name.clone(),
            employee.title.clone().unwrap_or_default(),
            employee.department.clone().unwrap_or_default(),
            employee.salary.map(salary_cell).unwrap_or_default(),
            employee.manager.clone().unwrap_or_default(),
        ]);
    }
    table
}
