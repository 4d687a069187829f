//! Policy switches for the substitution engines

use serde::Deserialize;
use std::fmt::Display;

/// Which engine a renderer runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Substitute what is possible and report the rest as warnings
    #[default]
    Diagnostic,
    /// Fail when any placeholder has no matching field
    Strict,
}

/// How the diagnostic engine decides that a variable was not found.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotFoundCheck {
    /// Warn when the value is absent from the text after replacement.
    ///
    /// An empty value is always considered present, and a value that already
    /// occurs elsewhere in the text suppresses the warning.
    #[default]
    ValuePresence,
    /// Warn when the text held no `${key}` marker before replacement
    MarkerOccurrence,
}

/// How the strict engine pairs a marker with a field name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Marker name must equal the field name
    #[default]
    Exact,
    /// Marker text only has to contain the field name, so `name` matches
    /// `${username}`. Legacy compatibility only.
    Containment,
}

impl Display for Policy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Policy::Diagnostic => "diagnostic",
            Policy::Strict => "strict",
        };
        write!(f, "{s}")
    }
}
