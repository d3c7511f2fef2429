#![allow(dead_code)]

use app_cli::error::{Error, Result};
use app_cli::prompt::{Prompter, Validator};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::Path;

/// Prompter that replays canned answers and re-asks on validation failure,
/// the same way the terminal prompter does.
#[derive(Default)]
pub struct ScriptedPrompter {
    selections: RefCell<VecDeque<usize>>,
    answers: RefCell<VecDeque<String>>,
    pub rejected: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(selection: usize, answers: &[&str]) -> Self {
        Self {
            selections: RefCell::new(VecDeque::from([selection])),
            answers: RefCell::new(answers.iter().map(|a| a.to_string()).collect()),
            rejected: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, _prompt: &str, items: &[String], _default: usize) -> Result<usize> {
        let index = self
            .selections
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| Error::ValidationError("no selection left".to_string()))?;
        assert!(index < items.len());
        Ok(index)
    }

    fn text(&self, prompt: &str, default: Option<&str>, validate: Validator<'_>) -> Result<String> {
        loop {
            let answer = self
                .answers
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| Error::ValidationError(format!("no answer left for '{prompt}'")))?;
            let answer = match default {
                Some(default) if answer.is_empty() => default.to_string(),
                _ => answer,
            };
            match validate(&answer) {
                Ok(()) => return Ok(answer),
                Err(message) => self.rejected.borrow_mut().push(message),
            }
        }
    }
}

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write<P: AsRef<Path>>(root: P, relative: &str, content: &str) {
    let path = root.as_ref().join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
