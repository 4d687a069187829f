//! Placeholder substitution engines
//!
//! This module contains the core substitution components:
//! - `marker`: Scanning text for `${...}` placeholder markers
//! - `parsed`: The result and warning types of the diagnostic engine
//! - `engine`: Best-effort substitution reporting problems as warnings
//! - `strict`: All-or-nothing substitution failing on unresolved markers

pub mod engine;
pub mod marker;
pub mod parsed;
pub mod strict;

pub use engine::{render_text, substitute, substitute_with};
pub use marker::{has_markers, scan_fields, scan_markers, Marker};
pub use parsed::{ParsedTemplate, TemplateWarning, WarningKind};
pub use strict::{replace_fields, replace_fields_with};
