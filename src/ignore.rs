//! Exclusion rules for template trees.
//! Rules files (`.skip` by default) hold one regular expression per line; any
//! template path matching any rule from any discovered rules file is left out
//! of the generated project.

use crate::error::{Error, Result};
use log::debug;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// A compiled exclusion pattern.
#[derive(Debug, Clone)]
pub struct PathMatcher {
    regex: Regex,
}

impl PathMatcher {
    /// Compiles a single rules-file line.
    ///
    /// # Errors
    /// * `Error::PatternError` if the line is not a valid regular expression
    pub fn new(pattern: &str) -> Result<Self> {
        Self::compile(pattern, "<inline>")
    }

    fn compile(pattern: &str, origin: &str) -> Result<Self> {
        let regex = Regex::new(pattern).map_err(|source| Error::PatternError {
            pattern: pattern.to_string(),
            path: origin.to_string(),
            source,
        })?;
        Ok(Self { regex })
    }

    /// Matches a template-relative path. Backslashes are normalised to
    /// forward slashes first.
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(&normalize(path))
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

/// Where a rules file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleScope {
    /// Rules file at the template root, or directly inside a sibling template
    Global,
    /// Rules file directly inside the selected template
    PerTemplate,
    /// Rules file nested somewhere below a template directory
    PerSubdirectory,
}

/// The matchers loaded from one rules file.
#[derive(Debug, Clone)]
pub struct RuleSource {
    pub scope: RuleScope,
    pub path: PathBuf,
    pub matchers: Vec<PathMatcher>,
}

impl RuleSource {
    /// Builds a source from raw rules-file content.
    ///
    /// Blank lines are ignored. A trailing `\r` is stripped from each line.
    pub fn parse<P: AsRef<Path>>(scope: RuleScope, path: P, contents: &str) -> Result<Self> {
        let path = path.as_ref();
        let origin = path.display().to_string();
        let matchers = contents
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .filter(|line| !line.trim().is_empty())
            .map(|line| PathMatcher::compile(line, &origin))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { scope, path: path.to_path_buf(), matchers })
    }

    /// Reads a rules file, treating a missing file as empty.
    pub fn read<P: AsRef<Path>>(scope: RuleScope, path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = if path.is_file() {
            fs::read_to_string(path)?
        } else {
            debug!("Rules file '{}' does not exist", path.display());
            String::new()
        };
        let source = Self::parse(scope, path, &contents)?;
        debug!("Loaded {} rule(s) from '{}'", source.matchers.len(), path.display());
        Ok(source)
    }

    /// Reads a rules file, creating it empty first if it does not exist.
    pub fn read_or_create<P: AsRef<Path>>(scope: RuleScope, path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Creating empty rules file '{}'", path.display());
            fs::write(path, "")?;
        }
        Self::read(scope, path)
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.matchers.iter().any(|m| m.is_match(path))
    }
}

/// The union of every rules source active for one scaffold run.
#[derive(Debug, Clone)]
pub struct SkipRuleSet {
    skip_file: PathMatcher,
    sources: Vec<RuleSource>,
}

impl SkipRuleSet {
    /// Builds a rule set from already loaded sources. The rules-file name is
    /// always excluded as well.
    pub fn new(skip_file_name: &str, sources: Vec<RuleSource>) -> Result<Self> {
        let skip_file = PathMatcher::compile(&regex::escape(skip_file_name), "<skip file name>")?;
        Ok(Self { skip_file, sources })
    }

    /// Collects every rules file that applies when materializing `selected`.
    ///
    /// Rules are aggregated catalog-wide: besides the root rules file and the
    /// selected template's own file, the rules files of every other template
    /// (top level and nested) are loaded too, so a path excluded anywhere in
    /// the catalog is excluded everywhere.
    pub fn discover<P: AsRef<Path>>(
        template_root: P,
        selected: &str,
        skip_file_name: &str,
    ) -> Result<Self> {
        let template_root = template_root.as_ref();
        let mut sources =
            vec![RuleSource::read_or_create(RuleScope::Global, template_root.join(skip_file_name))?];

        let mut templates = Vec::new();
        for entry in fs::read_dir(template_root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                templates.push(entry.path());
            }
        }
        templates.sort();

        for template_dir in &templates {
            if template_dir.file_name().is_some_and(|name| name != selected) {
                sources.push(RuleSource::read(RuleScope::Global, template_dir.join(skip_file_name))?);
            }

            for entry in WalkDir::new(template_dir).min_depth(2).sort_by_file_name() {
                let entry = entry?;
                if entry.file_type().is_file() && entry.file_name() == skip_file_name {
                    sources.push(RuleSource::read(RuleScope::PerSubdirectory, entry.path())?);
                }
            }
        }

        sources.push(RuleSource::read_or_create(
            RuleScope::PerTemplate,
            template_root.join(selected).join(skip_file_name),
        )?);

        Self::new(skip_file_name, sources)
    }

    /// Returns true if any matcher from any source matches the path.
    pub fn is_excluded(&self, relative_path: &str) -> bool {
        self.skip_file.is_match(relative_path)
            || self.sources.iter().any(|source| source.is_match(relative_path))
    }

    pub fn sources(&self) -> &[RuleSource] {
        &self.sources
    }
}

fn normalize(path: &str) -> std::borrow::Cow<'_, str> {
    if path.contains('\\') {
        path.replace('\\', "/").into()
    } else {
        path.into()
    }
}
