//! Scripted answers for driving the command loop without a terminal.

use std::collections::VecDeque;

use anyhow::{anyhow, bail, Result};
use employee_tracker::ui::Prompter;

/// One recorded user response.
#[derive(Debug, Clone)]
pub enum Step {
    /// Pick the list entry with this label.
    Pick(String),
    /// Return this raw index, even if it is out of range.
    Index(usize),
    /// Type this text.
    Type(String),
}

/// Replays a fixed script of answers; running out of script is an error.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    steps: VecDeque<Step>,
}

impl ScriptedPrompter {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self {
            steps: steps.into_iter().collect(),
        }
    }

    fn next_step(&mut self, message: &str) -> Result<Step> {
        self.steps
            .pop_front()
            .ok_or_else(|| anyhow!("script exhausted at prompt '{message}'"))
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&mut self, message: &str, labels: &[&str]) -> Result<usize> {
        match self.next_step(message)? {
            Step::Pick(label) => labels
                .iter()
                .position(|candidate| *candidate == label)
                .ok_or_else(|| anyhow!("'{label}' is not offered by '{message}': {labels:?}")),
            Step::Index(index) => Ok(index),
            Step::Type(text) => bail!("expected a selection for '{message}', script typed '{text}'"),
        }
    }

    fn input(&mut self, message: &str) -> Result<String> {
        match self.next_step(message)? {
            Step::Type(text) => Ok(text),
            other => bail!("expected text for '{message}', script has {other:?}"),
        }
    }
}

pub fn pick(label: &str) -> Step {
    Step::Pick(label.to_string())
}

pub fn typed(text: &str) -> Step {
    Step::Type(text.to_string())
}
