use crate::error::Result;
use crate::variables::Variables;

/// Trait for template rendering engines.
pub trait TemplateRenderer: Send + Sync {
    /// Renders a template string with the given variables.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `variables` - Values for the template's placeholders
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, variables: &Variables) -> Result<String>;
}
