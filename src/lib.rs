//! app-cli creates new projects from a local catalog of templates.
//! It asks for a template and some project metadata, then writes a filtered,
//! rendered copy of the template into a new directory.

/// Template catalog listing and display names
pub mod catalog;

/// Command-line interface module for app-cli
pub mod cli;

/// Persisted configuration and its precedence rules
pub mod config;

/// Common constants
pub mod constants;

/// Error types and handling for app-cli
pub mod error;

/// Exclusion rules read from `.skip` files
pub mod ignore;

/// Logger initialisation
pub mod logger;

/// Copies and renders a filtered template tree into a project directory
pub mod materializer;

/// User input and interaction handling
pub mod prompt;

/// Template file rendering
pub mod renderer;

/// Top-level run orchestration
pub mod scaffold;
