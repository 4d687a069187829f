//! Engine configuration
//!
//! This module contains the configuration system components:
//! - `types`: Policy switches selecting engine behavior
//! - `loader`: The `EngineConfig` structure and its parsing from JSON or YAML

pub mod loader;
pub mod types;

// Re-export commonly used types for convenience
pub use loader::EngineConfig;
pub use types::{MatchMode, NotFoundCheck, Policy};
