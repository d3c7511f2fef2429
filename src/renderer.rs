//! Template file rendering.
//! Project variables are injected into template file contents with MiniJinja.
use crate::error::{Error, Result};
use minijinja::Environment;
use serde::Serialize;

/// Variables available to every template file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectVariables {
    pub project_name: String,
    pub version: String,
    pub author: Option<String>,
}

impl ProjectVariables {
    /// Builds the JSON context handed to the renderer.
    pub fn to_context(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `name` - Name used in error messages, usually the template-relative path
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer. Trailing newlines in templates are preserved.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// # Errors
    /// * `Error::RenderError` if the template has invalid syntax or fails to evaluate
    fn render(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String> {
        let to_error = |source: minijinja::Error| Error::RenderError { path: name.to_string(), source };
        let tmpl = self.env.template_from_str(template).map_err(to_error)?;
        tmpl.render(context).map_err(to_error)
    }
}
