//! Constants used throughout the substitution engine

/// Opening delimiter of a placeholder marker
pub const MARKER_OPEN: &str = "${";

/// Closing delimiter of a placeholder marker
pub const MARKER_CLOSE: &str = "}";

/// Marker grammar for the diagnostic engine: `${identifier}` with an alphanumeric identifier
pub const IDENTIFIER_MARKER_PATTERN: &str = r"\$\{([a-zA-Z0-9]+)\}";

/// Marker grammar for the strict engine: anything up to the first closing brace
pub const FIELD_MARKER_PATTERN: &str = r"\$\{([^}]+)\}";

/// Warning message texts
pub mod messages {
    pub const TEMPLATE_UNDEFINED: &str = "Text is not defined";
    pub const VARIABLES_UNDEFINED: &str = "Variables is not defined";

    pub fn variable_not_found(key: &str) -> String {
        format!("Variable {key} not found in template")
    }

    pub fn variable_not_replaced(name: &str) -> String {
        format!("Variable {name} was no replaced")
    }
}
