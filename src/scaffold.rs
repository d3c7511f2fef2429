//! Scaffold run orchestration.
//! Resolves the configuration, then either answers `--help`/`--version`,
//! saves configuration flags, or asks for a template and creates the project.

use crate::catalog::list_templates;
use crate::cli::{help_text, Args};
use crate::config::{current_version, Config, ConfigData, ConfigOverrides};
use crate::constants::APP_NAME;
use crate::error::{Error, Result};
use crate::ignore::SkipRuleSet;
use crate::materializer::{MaterializeReport, Materializer};
use crate::prompt::{collect_answers, kebab_case, Prompter};
use crate::renderer::TemplateRenderer;
use log::{debug, info};
use std::path::{Path, PathBuf};

/// How a run ended.
#[derive(Debug)]
pub enum Outcome {
    /// `--help` was given
    Help(String),
    /// `--version` was given
    Version(String),
    /// Only configuration flags were given; they were saved to this file
    ConfigUpdated(PathBuf),
    /// A project was created
    Created(MaterializeReport),
}

/// One invocation of the tool.
pub struct Scaffold {
    args: Args,
    cwd: PathBuf,
}

impl Scaffold {
    /// `cwd` is where the templates default lives and where the project
    /// directory is created.
    pub fn new<P: Into<PathBuf>>(args: Args, cwd: P) -> Self {
        Self { args, cwd: cwd.into() }
    }

    /// Directory holding `config.json`: `--config` if given, otherwise the
    /// platform configuration directory, otherwise the working directory.
    pub fn config_dir(&self) -> PathBuf {
        self.args
            .config
            .clone()
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Runs the whole flow.
    ///
    /// # Errors
    /// * `Error::TemplatePathError` if the configured template root is missing
    /// * `Error::CatalogError` if it holds no templates
    /// * any error from rule discovery, prompting or materialization
    pub fn run(&self, prompter: &dyn Prompter, renderer: &dyn TemplateRenderer) -> Result<Outcome> {
        let defaults = ConfigData::defaults(&self.cwd);
        let config_dir = self.config_dir();

        if self.args.help || self.args.version {
            let config = Config::load(&config_dir, defaults, &ConfigOverrides::default())?;
            let version = current_version(config.default_version());
            return Ok(if self.args.help {
                Outcome::Help(help_text(&version, &config.path().display().to_string()))
            } else {
                Outcome::Version(version)
            });
        }

        let overrides = self.args.overrides();
        let config = Config::load(&config_dir, defaults, &overrides)?;
        if !overrides.is_empty() {
            info!("Configuration saved to '{}'", config.path().display());
            return Ok(Outcome::ConfigUpdated(config.path().to_path_buf()));
        }

        let report = self.create_project(&config, prompter, renderer)?;
        Ok(Outcome::Created(report))
    }

    fn create_project(
        &self,
        config: &Config,
        prompter: &dyn Prompter,
        renderer: &dyn TemplateRenderer,
    ) -> Result<MaterializeReport> {
        let template_root = config.dir();
        ensure_template_root(template_root)?;

        let templates = list_templates(template_root)?;
        let answers = collect_answers(prompter, &templates, config, &self.cwd)?;
        debug!("Selected template '{}'", answers.template.name);

        let rules =
            SkipRuleSet::discover(template_root, &answers.template.name, config.skip_file_name())?;
        let target = self.cwd.join(kebab_case(&answers.variables.project_name));

        Materializer::new(renderer, &rules).materialize(
            &answers.template.path,
            &target,
            &answers.variables,
        )
    }
}

/// Fails with `Error::TemplatePathError` if the template root is missing.
pub fn ensure_template_root<P: AsRef<Path>>(template_root: P) -> Result<()> {
    let template_root = template_root.as_ref();
    if !template_root.is_dir() {
        return Err(Error::TemplatePathError { template_dir: template_root.display().to_string() });
    }
    Ok(())
}
