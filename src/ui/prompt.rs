//! Question/answer plumbing shared by every action. A batch of questions is
//! asked in order through a [`Prompter`] and comes back as [`Answers`], keyed
//! by question name.

use std::collections::HashMap;

use anyhow::{anyhow, bail, Result};

/// The value carried by a list choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Id(i64),
    /// The explicit "no selection" entry, e.g. an employee without manager.
    Absent,
}

/// One entry of a choice list: what the user sees and what the caller gets.
#[derive(Debug, Clone, PartialEq)]
pub struct Choice {
    pub label: String,
    pub value: Value,
}

impl Choice {
    pub fn id(label: impl Into<String>, id: i64) -> Self {
        Self {
            label: label.into(),
            value: Value::Id(id),
        }
    }

    pub fn absent(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Value::Absent,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Question {
    /// Free text, returned exactly as entered.
    Input {
        name: &'static str,
        message: String,
    },
    /// Single selection from a closed list.
    List {
        name: &'static str,
        message: String,
        choices: Vec<Choice>,
    },
}

impl Question {
    pub fn input(name: &'static str, message: impl Into<String>) -> Self {
        Question::Input {
            name,
            message: message.into(),
        }
    }

    pub fn list(name: &'static str, message: impl Into<String>, choices: Vec<Choice>) -> Self {
        Question::List {
            name,
            message: message.into(),
            choices,
        }
    }

    fn name(&self) -> &'static str {
        match self {
            Question::Input { name, .. } | Question::List { name, .. } => name,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Id(i64),
    Absent,
}

impl From<Value> for Answer {
    fn from(value: Value) -> Self {
        match value {
            Value::Id(id) => Answer::Id(id),
            Value::Absent => Answer::Absent,
        }
    }
}

/// Answers to one batch of questions.
#[derive(Debug, Default, Clone)]
pub struct Answers {
    values: HashMap<&'static str, Answer>,
}

impl Answers {
    /// Free-text answer for `name`.
    pub fn text(&self, name: &str) -> Result<&str> {
        match self.values.get(name) {
            Some(Answer::Text(text)) => Ok(text.as_str()),
            other => Err(unexpected(name, "text", other)),
        }
    }

    /// A list answer that must be a real identifier.
    pub fn id(&self, name: &str) -> Result<i64> {
        match self.values.get(name) {
            Some(Answer::Id(id)) => Ok(*id),
            other => Err(unexpected(name, "an id", other)),
        }
    }

    /// A list answer that may be the explicit absent choice.
    pub fn optional_id(&self, name: &str) -> Result<Option<i64>> {
        match self.values.get(name) {
            Some(Answer::Id(id)) => Ok(Some(*id)),
            Some(Answer::Absent) => Ok(None),
            other => Err(unexpected(name, "an id or none", other)),
        }
    }
}

fn unexpected(name: &str, wanted: &str, found: Option<&Answer>) -> anyhow::Error {
    match found {
        Some(answer) => anyhow!("answer '{name}' is {answer:?}, expected {wanted}"),
        None => anyhow!("no answer recorded for '{name}'"),
    }
}

/// The two interactions the command loop needs from a user.
pub trait Prompter {
    /// Show `labels` as a single-select list and return the chosen index.
    fn select(&mut self, message: &str, labels: &[&str]) -> Result<usize>;

    /// Ask for one line of free text.
    fn input(&mut self, message: &str) -> Result<String>;
}

/// Ask `questions` one after another and collect the answers.
pub fn ask<P: Prompter + ?Sized>(prompter: &mut P, questions: &[Question]) -> Result<Answers> {
    let mut answers = Answers::default();

    for question in questions {
        let answer = match question {
            Question::Input { message, .. } => Answer::Text(prompter.input(message)?),
            Question::List {
                name,
                message,
                choices,
            } => {
                if choices.is_empty() {
                    bail!("question '{name}' has no choices");
                }
                let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
                let index = prompter.select(message, &labels)?;
                let choice = choices
                    .get(index)
                    .ok_or_else(|| anyhow!("selection {index} out of range for '{name}'"))?;
                choice.value.into()
            }
        };
        answers.values.insert(question.name(), answer);
    }

    Ok(answers)
}
