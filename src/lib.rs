//! `${name}` placeholder substitution with diagnostics.
//!
//! Two policies are offered, one per operation:
//!
//! - [`substitute`] replaces what it can and reports unused variables and
//!   leftover markers as warnings. It never fails.
//! - [`replace_fields`] either replaces every marker or fails with
//!   [`Error::MissingFields`].
//!
//! ```rust
//! use dollar_template::{replace_fields, substitute, Variables};
//!
//! let vars = Variables::from([("name", "John")]);
//!
//! let parsed = substitute(Some("Hello, ${name}!"), Some(&vars));
//! assert_eq!(parsed.text(), "Hello, John!");
//! assert!(parsed.is_clean());
//!
//! assert_eq!(replace_fields("Hello, ${name}!", &vars).unwrap(), "Hello, John!");
//! ```

/// Engine configuration and policy switches.
pub mod config;

/// Marker delimiters, patterns and warning texts.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Policy-agnostic rendering behind a common trait.
pub mod renderer;

/// Marker scanning and the two substitution engines.
pub mod template;

/// Ordered variable mapping.
pub mod variables;

pub use config::{EngineConfig, MatchMode, NotFoundCheck, Policy};
pub use error::{Error, Result};
pub use renderer::{get_renderer, DiagnosticRenderer, StrictRenderer, TemplateRenderer};
pub use template::{
    render_text, replace_fields, replace_fields_with, scan_fields, scan_markers, substitute,
    substitute_with, Marker, ParsedTemplate, TemplateWarning, WarningKind,
};
pub use variables::Variables;
