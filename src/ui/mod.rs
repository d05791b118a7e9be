//! Terminal front-end: prompts, tables and the command loop that ties them to
//! the persistence layer.

mod app;
mod menu;
pub mod prompt;
pub mod table;
mod terminal;

pub use app::{App, Flow};
pub use menu::MenuAction;
pub use prompt::{ask, Answer, Answers, Choice, Prompter, Question, Value};
pub use terminal::TerminalPrompter;
