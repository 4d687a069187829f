use crate::{
    config::EngineConfig,
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
    template::{substitute_with, ParsedTemplate},
    variables::Variables,
};
use log::debug;

/// Renderer that substitutes what it can and logs everything else.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticRenderer {
    config: EngineConfig,
}

impl DiagnosticRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Runs the engine and returns text and warnings untouched.
    pub fn parse(&self, template: &str, variables: &Variables) -> ParsedTemplate {
        substitute_with(Some(template), Some(variables), &self.config)
    }
}

impl TemplateRenderer for DiagnosticRenderer {
    fn render(&self, template: &str, variables: &Variables) -> Result<String> {
        let parsed = self.parse(template, variables);
        debug!("Rendered template with {} warning(s)", parsed.warnings().len());

        if self.config.deny_warnings && !parsed.is_clean() {
            let messages = parsed.messages().into_iter().map(String::from).collect();
            return Err(Error::Warnings(messages));
        }
        Ok(parsed.into_text())
    }
}
