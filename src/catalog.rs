//! Template catalog discovery.
//! Every directory directly under the template root is one template. A
//! directory named `01 [React App]` is shown to the user as `React App`.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// One template available for scaffolding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Raw directory name
    pub name: String,
    /// Human-friendly label shown in the prompt
    pub label: String,
    /// Absolute or root-relative path to the template directory
    pub path: PathBuf,
}

impl TemplateEntry {
    pub fn new<P: AsRef<Path>>(root: P, name: &str) -> Self {
        Self {
            name: name.to_string(),
            label: display_label(name).to_string(),
            path: root.as_ref().join(name),
        }
    }
}

impl std::fmt::Display for TemplateEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Extracts the text between the first `[` and its matching `]`.
///
/// Falls back to the raw name when there is no bracketed part or it is empty.
pub fn display_label(name: &str) -> &str {
    let Some(start) = name.find('[') else {
        return name;
    };
    let mut depth = 0usize;
    for (offset, ch) in name[start..].char_indices() {
        match ch {
            '[' => depth += 1,
            ']' => {
                depth -= 1;
                if depth == 0 {
                    let label = &name[start + 1..start + offset];
                    return if label.is_empty() { name } else { label };
                }
            }
            _ => {}
        }
    }
    name
}

/// Lists the templates under `template_root`, sorted by directory name.
///
/// # Errors
/// * `Error::CatalogError` if the root does not exist or holds no directories
pub fn list_templates<P: AsRef<Path>>(template_root: P) -> Result<Vec<TemplateEntry>> {
    let template_root = template_root.as_ref();
    if !template_root.is_dir() {
        return Err(Error::CatalogError(format!(
            "templates directory '{}' does not exist",
            template_root.display()
        )));
    }

    let mut entries = Vec::new();
    for entry in fs::read_dir(template_root)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        match entry.file_name().to_str() {
            Some(name) => entries.push(TemplateEntry::new(template_root, name)),
            None => debug!("Skipping template with non UTF-8 name: {:?}", entry.file_name()),
        }
    }

    if entries.is_empty() {
        return Err(Error::CatalogError(format!(
            "no templates found in '{}'",
            template_root.display()
        )));
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("Found {} template(s) in '{}'", entries.len(), template_root.display());
    Ok(entries)
}
