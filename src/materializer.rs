//! Turns a template tree into a project tree.
//! Filters the template listing through a [`SkipRuleSet`], creates the
//! surviving directories, then renders and writes the surviving files.

use crate::error::{Error, Result};
use crate::ignore::SkipRuleSet;
use crate::renderer::{ProjectVariables, TemplateRenderer};
use log::debug;
use std::fs;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One entry of the raw template listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSystemEntry {
    /// Path relative to the template directory, forward-slash separated
    pub relative_path: String,
    pub kind: EntryKind,
}

/// What a successful materialization produced.
#[derive(Debug, Clone, Default)]
pub struct MaterializeReport {
    pub target: PathBuf,
    /// Directories created by this run (pre-existing ones are not listed)
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
    /// Number of listing entries dropped by the rules
    pub skipped: usize,
}

/// Lists every descendant of `template_dir`, directories and files alike.
///
/// The listing is sorted by file name within each directory. Symbolic links
/// and other special files are left out.
pub fn list_entries<P: AsRef<Path>>(template_dir: P) -> Result<Vec<FileSystemEntry>> {
    let template_dir = template_dir.as_ref();
    let mut entries = Vec::new();

    for entry in WalkDir::new(template_dir).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        let kind = if entry.file_type().is_dir() {
            EntryKind::Directory
        } else if entry.file_type().is_file() {
            EntryKind::File
        } else {
            debug!("Skipping special file '{}'", entry.path().display());
            continue;
        };

        let relative = entry
            .path()
            .strip_prefix(template_dir)
            .map_err(|e| Error::TemplateError(e.to_string()))?;
        let relative_path = relative
            .to_str()
            .ok_or_else(|| {
                Error::TemplateError(format!("non UTF-8 path '{}'", relative.display()))
            })?
            .replace('\\', "/");

        entries.push(FileSystemEntry { relative_path, kind });
    }

    Ok(entries)
}

/// Joins a template-relative path onto the target root, refusing anything that
/// would land outside of it.
pub fn resolve_target<P: AsRef<Path>>(target_root: P, relative_path: &str) -> Result<PathBuf> {
    let relative = Path::new(relative_path);
    if relative.as_os_str().is_empty()
        || !relative.components().all(|c| matches!(c, Component::Normal(_)))
    {
        return Err(Error::ValidationError(format!(
            "path '{relative_path}' escapes the project directory"
        )));
    }
    Ok(target_root.as_ref().join(relative))
}

/// Copies and renders a filtered template tree.
pub struct Materializer<'a> {
    renderer: &'a dyn TemplateRenderer,
    rules: &'a SkipRuleSet,
}

impl<'a> Materializer<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, rules: &'a SkipRuleSet) -> Self {
        Self { renderer, rules }
    }

    /// Materializes `template_path` into `target_path`.
    ///
    /// Directories and files are filtered independently: excluding a
    /// directory does not exclude what is inside it. Every surviving
    /// directory is created before the first file is written. A render
    /// failure stops the run and leaves already written files in place.
    ///
    /// # Errors
    /// * `Error::RenderError` if a file fails to render
    /// * `Error::IoError` / `Error::WalkError` on filesystem failures
    pub fn materialize<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        template_path: P,
        target_path: Q,
        variables: &ProjectVariables,
    ) -> Result<MaterializeReport> {
        let template_path = template_path.as_ref();
        let target_path = target_path.as_ref();
        let context = variables.to_context()?;

        debug!(
            "Materializing '{}' into '{}'",
            template_path.display(),
            target_path.display()
        );

        let mut report = MaterializeReport { target: target_path.to_path_buf(), ..Default::default() };
        if !target_path.exists() {
            fs::create_dir_all(target_path)?;
        }

        let listing = list_entries(template_path)?;
        let (kept, skipped): (Vec<_>, Vec<_>) =
            listing.into_iter().partition(|entry| !self.rules.is_excluded(&entry.relative_path));
        for entry in &skipped {
            debug!("Skipping '{}'", entry.relative_path);
        }
        report.skipped = skipped.len();

        let directories = kept.iter().filter(|e| e.kind == EntryKind::Directory);
        let files = kept.iter().filter(|e| e.kind == EntryKind::File);

        for entry in directories {
            let target = resolve_target(target_path, &entry.relative_path)?;
            if !target.is_dir() {
                debug!("Creating directory '{}'", target.display());
                fs::create_dir_all(&target)?;
                report.directories.push(target);
            }
        }

        for entry in files {
            let target = resolve_target(target_path, &entry.relative_path)?;
            if let Some(parent) = target.parent() {
                if !parent.is_dir() {
                    fs::create_dir_all(parent)?;
                    report.directories.push(parent.to_path_buf());
                }
            }
            let source = template_path.join(&entry.relative_path);
            self.write_file(&source, &target, &entry.relative_path, &context)?;
            report.files.push(target);
        }

        Ok(report)
    }

    fn write_file(
        &self,
        source: &Path,
        target: &Path,
        name: &str,
        context: &serde_json::Value,
    ) -> Result<()> {
        let bytes = fs::read(source)?;
        match String::from_utf8(bytes) {
            Ok(content) => {
                let rendered = self.renderer.render(name, &content, context)?;
                debug!("Writing file '{}'", target.display());
                fs::write(target, rendered)?;
            }
            Err(err) => {
                debug!("Copying binary file '{}'", target.display());
                fs::write(target, err.into_bytes())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_target() {
        let root = Path::new("out");
        assert_eq!(resolve_target(root, "a/b.txt").unwrap(), PathBuf::from("out/a/b.txt"));
        assert!(resolve_target(root, "../evil").is_err());
        assert!(resolve_target(root, "/etc/passwd").is_err());
        assert!(resolve_target(root, "").is_err());
    }
}
