//! Policy-agnostic rendering
//!
//! - `interface`: The `TemplateRenderer` trait
//! - `diagnostic`: Renderer backed by the warning-reporting engine
//! - `strict`: Renderer backed by the failing engine

pub mod diagnostic;
pub mod interface;
pub mod strict;

pub use diagnostic::DiagnosticRenderer;
pub use interface::TemplateRenderer;
pub use strict::StrictRenderer;

use crate::config::{EngineConfig, Policy};

/// Builds the renderer selected by `config.policy`.
pub fn get_renderer(config: &EngineConfig) -> Box<dyn TemplateRenderer> {
    match config.policy {
        Policy::Diagnostic => Box::new(DiagnosticRenderer::with_config(config.clone())),
        Policy::Strict => Box::new(StrictRenderer::with_config(config.clone())),
    }
}
