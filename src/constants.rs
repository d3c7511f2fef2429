//! Common constants used throughout app-cli.

/// Application name, used for the default config directory
pub const APP_NAME: &str = "app-cli";

/// Name of the persisted configuration file inside the config directory
pub const CONFIG_FILE: &str = "config.json";

/// Default rules file name
pub const SKIP_FILE: &str = ".skip";

/// Default version offered for new projects
pub const DEFAULT_VERSION: &str = "0.0.1";

/// Name of the templates directory under the working directory
pub const TEMPLATES_DIR: &str = "templates";

/// Environment variable overriding the reported tool version
pub const VERSION_ENV: &str = "APP_CLI_VERSION";

/// Minimum length of a project name
pub const MIN_NAME_LEN: usize = 3;
