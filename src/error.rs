//! Error handling for app-cli.
//! Defines the error type and result alias used throughout the application.

use std::io;
use thiserror::Error;

/// Errors that can occur while resolving configuration, discovering templates
/// or materializing a project.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Failure while walking a template tree
    #[error("Walk error: {0}.")]
    WalkError(#[from] walkdir::Error),

    /// Failure while reading or writing JSON
    #[error("JSON error: {0}.")]
    JsonError(#[from] serde_json::Error),

    /// A rules file contains a line that is not a valid regular expression
    #[error("Invalid pattern '{pattern}' in '{path}': {source}.")]
    PatternError {
        pattern: String,
        path: String,
        #[source]
        source: regex::Error,
    },

    /// Represents errors that occur while reading a template tree
    #[error("Template error: {0}.")]
    TemplateError(String),

    /// The template root is missing or has no templates in it
    #[error("Catalog error: {0}.")]
    CatalogError(String),

    /// The configured template root does not exist
    #[error("Templates directory '{template_dir}' does not exist.")]
    TemplatePathError { template_dir: String },

    /// A template file could not be rendered
    #[error("Failed to render '{path}': {source}.")]
    RenderError {
        path: String,
        #[source]
        source: minijinja::Error,
    },

    /// Represents validation failures in user input or data
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// Represents errors that occur during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// The interactive prompt failed
    #[error("Prompt error: {0}.")]
    PromptError(#[from] dialoguer::Error),
}

/// Convenience type alias for Results with [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(1);
}
