//! Placeholder marker scanning.

use crate::constants::{
    FIELD_MARKER_PATTERN, IDENTIFIER_MARKER_PATTERN, MARKER_CLOSE, MARKER_OPEN,
};
use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static IDENTIFIER_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(IDENTIFIER_MARKER_PATTERN).expect("identifier marker pattern is valid")
});

static FIELD_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(FIELD_MARKER_PATTERN).expect("field marker pattern is valid")
});

/// A single placeholder occurrence found in a text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    /// The full marker text including delimiters, e.g. `${name}`
    pub text: String,
    /// The text between the delimiters, e.g. `name`
    pub name: String,
    /// Byte range of `text` in the scanned string
    pub span: Range<usize>,
}

fn scan(re: &Regex, text: &str) -> Vec<Marker> {
    re.captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let name = caps.get(1)?;
            Some(Marker {
                text: whole.as_str().to_string(),
                name: name.as_str().to_string(),
                span: whole.range(),
            })
        })
        .collect()
}

/// Finds every `${identifier}` marker, left to right.
///
/// Only alphanumeric identifiers are recognised, so `${first_name}` and
/// `${}` are left alone.
pub fn scan_markers(text: &str) -> Vec<Marker> {
    scan(&IDENTIFIER_MARKER, text)
}

/// Finds every `${...}` marker whose content is any run of non-`}` characters.
pub fn scan_fields(text: &str) -> Vec<Marker> {
    scan(&FIELD_MARKER, text)
}

/// Whether `text` still holds at least one `${identifier}` marker.
pub fn has_markers(text: &str) -> bool {
    IDENTIFIER_MARKER.is_match(text)
}

/// Builds the literal marker for a variable name.
pub fn marker_for(key: &str) -> String {
    format!("{MARKER_OPEN}{key}{MARKER_CLOSE}")
}
