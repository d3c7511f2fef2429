//! Persisted application configuration.
//! Settings come from three places, highest priority first: command-line
//! overrides, the `config.json` file in the config directory, and built-in
//! defaults. Overrides are written back to the file, so a flag given once
//! becomes the default for later runs.

use crate::constants::{CONFIG_FILE, DEFAULT_VERSION, SKIP_FILE, TEMPLATES_DIR, VERSION_ENV};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Settings stored in `config.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigData {
    /// Template root directory
    pub dir: PathBuf,
    pub default_author: Option<String>,
    pub default_version: String,
    /// Name of the rules files listing excluded paths
    pub skip_file_name: String,
}

impl ConfigData {
    /// Built-in defaults. Templates are looked up in `<cwd>/templates`.
    pub fn defaults<P: AsRef<Path>>(cwd: P) -> Self {
        Self {
            dir: cwd.as_ref().join(TEMPLATES_DIR),
            default_author: None,
            default_version: DEFAULT_VERSION.to_string(),
            skip_file_name: SKIP_FILE.to_string(),
        }
    }

    fn set(&mut self, key: ConfigKey, value: String) {
        match key {
            ConfigKey::Dir => self.dir = PathBuf::from(value),
            ConfigKey::DefaultAuthor => self.default_author = Some(value),
            ConfigKey::DefaultVersion => self.default_version = value,
            ConfigKey::SkipFileName => self.skip_file_name = value,
        }
    }

    /// Applies one persisted value. `null` clears the author and is ignored
    /// for every other key.
    fn apply_json(&mut self, key: ConfigKey, value: serde_json::Value) -> Result<()> {
        match value {
            serde_json::Value::String(s) => self.set(key, s),
            serde_json::Value::Null if key == ConfigKey::DefaultAuthor => {
                self.default_author = None
            }
            serde_json::Value::Null => {}
            other => {
                return Err(Error::ConfigError(format!(
                    "expected a string for '{}', found {}",
                    key.as_str(),
                    other
                )))
            }
        }
        Ok(())
    }
}

/// Keys of the persisted schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigKey {
    Dir,
    DefaultAuthor,
    DefaultVersion,
    SkipFileName,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 4] =
        [ConfigKey::Dir, ConfigKey::DefaultAuthor, ConfigKey::DefaultVersion, ConfigKey::SkipFileName];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigKey::Dir => "dir",
            ConfigKey::DefaultAuthor => "defaultAuthor",
            ConfigKey::DefaultVersion => "defaultVersion",
            ConfigKey::SkipFileName => "skipFileName",
        }
    }
}

impl FromStr for ConfigKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ConfigKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::ConfigError(format!("unknown configuration key '{s}'")))
    }
}

/// Values supplied on the command line for schema keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub dir: Option<PathBuf>,
    pub default_author: Option<String>,
    pub default_version: Option<String>,
    pub skip_file_name: Option<String>,
}

impl ConfigOverrides {
    pub fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }

    /// Supplied overrides in schema order.
    pub fn entries(&self) -> Vec<(ConfigKey, String)> {
        let mut entries = Vec::new();
        if let Some(dir) = &self.dir {
            entries.push((ConfigKey::Dir, dir.display().to_string()));
        }
        if let Some(author) = &self.default_author {
            entries.push((ConfigKey::DefaultAuthor, author.clone()));
        }
        if let Some(version) = &self.default_version {
            entries.push((ConfigKey::DefaultVersion, version.clone()));
        }
        if let Some(skip) = &self.skip_file_name {
            entries.push((ConfigKey::SkipFileName, skip.clone()));
        }
        entries
    }
}

/// The effective configuration, bound to the file it is persisted in.
#[derive(Debug, Clone)]
pub struct Config {
    data: ConfigData,
    path: PathBuf,
}

impl Config {
    /// Loads `<config_dir>/config.json` and merges it with `defaults` and
    /// `overrides`.
    ///
    /// A missing file is created from the defaults. Otherwise the known keys of
    /// the file are laid over the defaults (unknown keys are dropped). Either
    /// way each override is then applied and persisted immediately.
    ///
    /// # Errors
    /// * `Error::ConfigError` if the file is not a JSON object or holds a value of the wrong type
    /// * `Error::IoError` if the file cannot be read or written
    pub fn load<P: AsRef<Path>>(
        config_dir: P,
        defaults: ConfigData,
        overrides: &ConfigOverrides,
    ) -> Result<Self> {
        let path = config_dir.as_ref().join(CONFIG_FILE);
        let mut config = Self { data: defaults, path };

        if config.path.exists() {
            config.merge_file()?;
        } else {
            debug!("Creating configuration file '{}'", config.path.display());
            config.write()?;
        }

        for (key, value) in overrides.entries() {
            config.update(key, value)?;
        }

        Ok(config)
    }

    /// Lays the known keys of the existing file over the current data.
    fn merge_file(&mut self) -> Result<()> {
        debug!("Loading configuration from '{}'", self.path.display());
        let content = fs::read_to_string(&self.path)?;
        let raw: IndexMap<String, serde_json::Value> = serde_json::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("invalid '{}': {}", self.path.display(), e)))?;

        for (name, value) in raw {
            match name.parse::<ConfigKey>() {
                Ok(key) => self.data.apply_json(key, value)?,
                Err(_) => debug!("Dropping unknown configuration key '{name}'"),
            }
        }
        Ok(())
    }

    /// Sets one key and writes the whole configuration back to disk before
    /// returning.
    pub fn update<S: Into<String>>(&mut self, key: ConfigKey, value: S) -> Result<&mut Self> {
        let value = value.into();
        debug!("Setting '{}' to '{}'", key.as_str(), value);
        self.data.set(key, value);
        self.write()?;
        Ok(self)
    }

    fn write(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, content)?;
        debug!("Configuration written to '{}'", self.path.display());
        Ok(())
    }

    pub fn data(&self) -> &ConfigData {
        &self.data
    }

    /// Path of the persisted configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn dir(&self) -> &Path {
        &self.data.dir
    }

    pub fn default_author(&self) -> Option<&str> {
        self.data.default_author.as_deref()
    }

    pub fn default_version(&self) -> &str {
        &self.data.default_version
    }

    pub fn skip_file_name(&self) -> &str {
        &self.data.skip_file_name
    }
}

/// Version of the tool itself.
///
/// Taken from the `APP_CLI_VERSION` environment variable when set, otherwise
/// from the crate version. Falls back to `default_version` when that is not a
/// plain `MAJOR.MINOR.PATCH` version.
pub fn current_version(default_version: &str) -> String {
    let from_env = std::env::var(VERSION_ENV).ok();
    resolve_version(Some(from_env.as_deref().unwrap_or(env!("CARGO_PKG_VERSION"))), default_version)
}

/// Returns `candidate` if it looks like `MAJOR.MINOR.PATCH`, otherwise
/// `default_version`.
pub fn resolve_version(candidate: Option<&str>, default_version: &str) -> String {
    match candidate {
        Some(version) if is_plain_version(version) => version.to_string(),
        _ => default_version.to_string(),
    }
}

fn is_plain_version(version: &str) -> bool {
    Regex::new(r"^\d+\.\d+\.\d+$").is_ok_and(|re| re.is_match(version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_round_trip_names() {
        for key in ConfigKey::ALL {
            assert_eq!(key.as_str().parse::<ConfigKey>().unwrap(), key);
        }
        assert!("extra".parse::<ConfigKey>().is_err());
    }

    #[test]
    fn test_null_only_clears_author() {
        let mut data = ConfigData::defaults("/work");
        data.default_author = Some("Jane".to_string());
        data.apply_json(ConfigKey::DefaultAuthor, serde_json::Value::Null).unwrap();
        data.apply_json(ConfigKey::DefaultVersion, serde_json::Value::Null).unwrap();
        assert_eq!(data.default_author, None);
        assert_eq!(data.default_version, DEFAULT_VERSION);
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let mut data = ConfigData::defaults("/work");
        assert!(data.apply_json(ConfigKey::Dir, serde_json::json!(42)).is_err());
    }
}
