//! Core library surface for the employee tracker: an interactive menu over a
//! department, role and employee schema.
//!
//! The binary only wires these pieces together, so tests can drive the same
//! command loop with scripted answers.
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod models;
pub mod ui;

pub use config::StoreConfig;
pub use db::open_store;
pub use error::{ConfigError, StoreError};
pub use models::{Department, Employee, EmployeeListing, Role, RoleListing};
pub use ui::{App, TerminalPrompter};
