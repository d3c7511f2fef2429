//! User input and interaction handling.
//! The questions asked before scaffolding and the rules their answers must
//! satisfy. Terminal I/O goes through the [`Prompter`] trait so the flow can
//! be driven without a terminal.

use crate::catalog::TemplateEntry;
use crate::config::Config;
use crate::constants::MIN_NAME_LEN;
use crate::error::{Error, Result};
use crate::renderer::ProjectVariables;
use dialoguer::{Input, Select};
use std::path::{Component, Path};

/// Validation callback for text answers. `Err` carries the message shown
/// before asking again.
pub type Validator<'a> = &'a dyn Fn(&str) -> std::result::Result<(), String>;

/// Interactive question backend.
pub trait Prompter {
    /// Asks the user to pick one of `items` and returns its index.
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize>;

    /// Asks for free text. Implementations must keep asking until `validate`
    /// accepts the answer.
    fn text(&self, prompt: &str, default: Option<&str>, validate: Validator<'_>) -> Result<String>;
}

/// Terminal prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[String], default: usize) -> Result<usize> {
        Ok(Select::new().with_prompt(prompt).items(items).default(default).interact()?)
    }

    fn text(&self, prompt: &str, default: Option<&str>, validate: Validator<'_>) -> Result<String> {
        let mut input = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .validate_with(|value: &String| validate(value.as_str()));
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text()?)
    }
}

/// Everything the user chose for one scaffold run.
#[derive(Debug, Clone)]
pub struct Answers {
    pub template: TemplateEntry,
    pub variables: ProjectVariables,
}

/// Directory name for a project: lowercase, each whitespace character
/// replaced with `-`.
pub fn kebab_case(name: &str) -> String {
    name.to_lowercase().chars().map(|c| if c.is_whitespace() { '-' } else { c }).collect()
}

/// Checks a project name against the minimum length, against names that
/// would leave `parent` (separators, `..`, absolute paths) and against
/// existing directories in `parent`.
pub fn validate_project_name<P: AsRef<Path>>(name: &str, parent: P) -> Result<()> {
    if name.chars().count() < MIN_NAME_LEN {
        return Err(Error::ValidationError(format!(
            "Name should contain at least {MIN_NAME_LEN} characters"
        )));
    }
    let dir_name = kebab_case(name);
    let mut components = Path::new(&dir_name).components();
    let single_component = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );
    if !single_component || dir_name.contains(['/', '\\']) {
        return Err(Error::ValidationError(format!(
            "Name '{name}' must not contain path separators or refer to another directory"
        )));
    }
    let target = parent.as_ref().join(dir_name);
    if target.exists() {
        return Err(Error::ValidationError(format!(
            "Directory '{}' already exists",
            target.display()
        )));
    }
    Ok(())
}

/// Checks that a version is a semantic version such as `1.2.3`.
pub fn validate_version(version: &str) -> Result<()> {
    semver::Version::parse(version)
        .map(|_| ())
        .map_err(|e| Error::ValidationError(format!("'{version}' is not a semantic version: {e}")))
}

/// Asks for the template, project name, version and author.
///
/// Defaults for version and author come from `config`. An empty author
/// answer means no author.
pub fn collect_answers<P: AsRef<Path>>(
    prompter: &dyn Prompter,
    templates: &[TemplateEntry],
    config: &Config,
    parent: P,
) -> Result<Answers> {
    let parent = parent.as_ref();
    let labels: Vec<String> = templates.iter().map(|t| t.label.clone()).collect();
    let index = prompter.select("What template would you like to use?", &labels, 0)?;
    let template = templates
        .get(index)
        .cloned()
        .ok_or_else(|| Error::ValidationError(format!("no template at position {index}")))?;

    let name_rule = |value: &str| validate_project_name(value, parent).map_err(message);
    let project_name = prompter.text("Project name", None, &name_rule)?;

    let version_rule = |value: &str| validate_version(value).map_err(message);
    let version = prompter.text("Version", Some(config.default_version()), &version_rule)?;

    let any = |_: &str| -> std::result::Result<(), String> { Ok(()) };
    let author = prompter.text("Author", config.default_author(), &any)?;
    let author = Some(author.trim().to_string()).filter(|a| !a.is_empty());

    Ok(Answers { template, variables: ProjectVariables { project_name, version, author } })
}

fn message(err: Error) -> String {
    match err {
        Error::ValidationError(msg) => msg,
        other => other.to_string(),
    }
}
