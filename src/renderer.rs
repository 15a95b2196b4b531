//! Template renderers used to turn a row into text.

use indexmap::IndexMap;

use crate::template::Template;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template with the field mapping of one row.
    ///
    /// # Arguments
    /// * `template` - Template to render
    /// * `context` - Header name to value mapping of the row
    ///
    /// # Returns
    /// * `String` - Rendered text
    fn render(&self, template: &Template, context: &IndexMap<String, String>) -> String;
}

/// Renderer doing safe `$name` / `${name}` substitution.
/// Unknown placeholders are left untouched.
pub struct SafeSubstituteRenderer;

impl SafeSubstituteRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SafeSubstituteRenderer {
    fn default() -> Self {
        SafeSubstituteRenderer::new()
    }
}

impl TemplateRenderer for SafeSubstituteRenderer {
    fn render(&self, template: &Template, context: &IndexMap<String, String>) -> String {
        template.safe_substitute(context)
    }
}
