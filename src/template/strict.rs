//! All-or-nothing substitution.

use crate::config::{EngineConfig, MatchMode};
use crate::error::{Error, Result};
use crate::template::marker::{scan_fields, Marker};
use crate::variables::Variables;
use log::debug;

/// First field, in mapping order, that resolves `marker`.
fn matching_field<'a>(
    marker: &Marker,
    fields: &'a Variables,
    mode: MatchMode,
) -> Option<(&'a str, &'a str)> {
    fields.iter().find(|(name, _)| match mode {
        MatchMode::Exact => marker.name == *name,
        MatchMode::Containment => marker.text.contains(name),
    })
}

/// Replaces every `${...}` marker with exact field-name matching.
///
/// # Example
///
/// ```rust
/// use dollar_template::{replace_fields, Variables};
///
/// let fields = Variables::from([("name", "John")]);
/// assert_eq!(replace_fields("Hello, ${name}!", &fields).unwrap(), "Hello, John!");
///
/// let err = replace_fields("${greeting}, ${name}!", &fields).unwrap_err();
/// assert_eq!(err.to_string(), "The follow fields are not received: ['${greeting}']");
/// ```
pub fn replace_fields(template: &str, fields: &Variables) -> Result<String> {
    replace_fields_with(template, fields, &EngineConfig::default())
}

/// Replaces every `${...}` marker or fails listing the ones no field resolves.
///
/// Unresolved markers are reported in order of appearance, once per
/// occurrence. Output is built in a single pass, so inserted values are never
/// matched again.
pub fn replace_fields_with(
    template: &str,
    fields: &Variables,
    config: &EngineConfig,
) -> Result<String> {
    let markers = scan_fields(template);
    if markers.is_empty() {
        return Ok(template.to_string());
    }

    let resolved: Vec<(&Marker, Option<&str>)> = markers
        .iter()
        .map(|marker| {
            let value = matching_field(marker, fields, config.match_mode).map(|(_, v)| v);
            (marker, value)
        })
        .collect();

    let missing: Vec<String> = resolved
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(marker, _)| marker.text.clone())
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingFields { fields: missing });
    }

    let mut output = String::with_capacity(template.len());
    let mut cursor = 0;
    for (marker, value) in resolved {
        output.push_str(&template[cursor..marker.span.start]);
        output.push_str(value.unwrap_or_default());
        cursor = marker.span.end;
    }
    output.push_str(&template[cursor..]);

    debug!("Replaced {} field marker(s)", markers.len());
    Ok(output)
}
