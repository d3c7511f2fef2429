//! Command-line interface implementation for app-cli.
//! Provides argument parsing and help text formatting using clap.

use crate::config::ConfigOverrides;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;

/// Command-line arguments structure for app-cli.
///
/// Any of `--dir`, `--skip`, `--author` or `--app-version` only updates the
/// saved configuration; no project is created on that run.
#[derive(Parser, Debug, Default, Clone)]
#[command(
    name = "app-cli",
    about = "Create a new project from a template",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// Display help message
    #[arg(short, long)]
    pub help: bool,

    /// Show app version
    #[arg(short, long)]
    pub version: bool,

    /// Config directory path
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Templates directory path
    #[arg(short, long, value_name = "PATH")]
    pub dir: Option<PathBuf>,

    /// Skip file name
    #[arg(short, long, value_name = "NAME")]
    pub skip: Option<String>,

    /// Set default project author
    #[arg(long, value_name = "NAME")]
    pub author: Option<String>,

    /// Set default project version
    #[arg(long = "app-version", value_name = "VERSION")]
    pub app_version: Option<String>,

    /// Enable verbose logging output
    #[arg(long)]
    pub verbose: bool,
}

impl Args {
    /// Configuration values given on the command line.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            dir: self.dir.clone(),
            default_author: self.author.clone(),
            default_version: self.app_version.clone(),
            skip_file_name: self.skip.clone(),
        }
    }
}

/// Parses command line arguments, exiting with clap's message on bad input.
pub fn get_args() -> Args {
    Args::parse()
}

/// Builds the `--help` text: tool version, config file location and options.
pub fn help_text(version: &str, config_path: &str) -> String {
    let help = Args::command()
        .help_template(
            r#"{about-section}
{usage-heading} {usage}

{all-args}
"#,
        )
        .render_help();
    format!("app-cli {version}\nConfig file: {config_path}\n\n{help}")
}
