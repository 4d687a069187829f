use crate::{
    config::EngineConfig, error::Result, renderer::interface::TemplateRenderer,
    template::replace_fields_with, variables::Variables,
};

/// Renderer that refuses to produce output with unresolved markers.
#[derive(Debug, Clone, Default)]
pub struct StrictRenderer {
    config: EngineConfig,
}

impl StrictRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }
}

impl TemplateRenderer for StrictRenderer {
    fn render(&self, template: &str, variables: &Variables) -> Result<String> {
        replace_fields_with(template, variables, &self.config)
    }
}
