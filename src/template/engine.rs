//! Best-effort substitution that reports problems as warnings.

use crate::config::{EngineConfig, NotFoundCheck};
use crate::constants::messages;
use crate::template::marker::{marker_for, scan_markers};
use crate::template::parsed::{ParsedTemplate, TemplateWarning, WarningKind};
use crate::variables::Variables;
use log::{debug, warn};

/// The shapes a call can take once absent inputs are accounted for.
enum TemplateInput<'a> {
    Valid { template: &'a str, variables: &'a Variables },
    MissingTemplate,
    MissingVariables { template: &'a str },
}

impl<'a> TemplateInput<'a> {
    fn classify(template: Option<&'a str>, variables: Option<&'a Variables>) -> Self {
        match (template, variables) {
            (None, _) => TemplateInput::MissingTemplate,
            (Some(template), None) => TemplateInput::MissingVariables { template },
            (Some(template), Some(variables)) => TemplateInput::Valid { template, variables },
        }
    }
}

fn warning(kind: WarningKind, message: String) -> TemplateWarning {
    warn!("{message}");
    TemplateWarning::new(kind, message)
}

/// Substitutes `${name}` markers using the default configuration.
///
/// # Example
///
/// ```rust
/// use dollar_template::{substitute, Variables};
///
/// let vars = Variables::from([("user", "John"), ("age", "35")]);
/// let parsed = substitute(Some("${user}"), Some(&vars));
///
/// assert_eq!(parsed.text(), "John");
/// assert_eq!(parsed.messages(), vec!["Variable age not found in template"]);
/// ```
pub fn substitute(template: Option<&str>, variables: Option<&Variables>) -> ParsedTemplate {
    substitute_with(template, variables, &EngineConfig::default())
}

/// Substitutes `${name}` markers, never failing.
///
/// Each variable is replaced in mapping order. Variables that do not make it
/// into the output and markers left over afterwards are reported as warnings,
/// the former first. Values are inserted verbatim and never re-expanded, so a
/// value that itself looks like `${x}` shows up as a leftover marker.
pub fn substitute_with(
    template: Option<&str>,
    variables: Option<&Variables>,
    config: &EngineConfig,
) -> ParsedTemplate {
    match TemplateInput::classify(template, variables) {
        TemplateInput::MissingTemplate => ParsedTemplate::new(
            "",
            vec![warning(
                WarningKind::TemplateUndefined,
                messages::TEMPLATE_UNDEFINED.to_string(),
            )],
        ),
        TemplateInput::MissingVariables { template } => ParsedTemplate::new(
            template,
            vec![warning(
                WarningKind::VariablesUndefined,
                messages::VARIABLES_UNDEFINED.to_string(),
            )],
        ),
        TemplateInput::Valid { template, variables } => {
            let replaced = replace_variables(template, variables, config.not_found_check);
            add_not_replaced_warnings(replaced)
        }
    }
}

/// Replaces every marker of every variable and returns the text only.
pub fn render_text(template: &str, variables: &Variables) -> String {
    variables.iter().fold(template.to_string(), |text, (key, value)| {
        text.replace(&marker_for(key), value)
    })
}

fn replace_variables(
    template: &str,
    variables: &Variables,
    check: NotFoundCheck,
) -> ParsedTemplate {
    let mut text = template.to_string();
    let mut warnings = Vec::new();

    for (key, value) in variables.iter() {
        let marker = marker_for(key);
        let occurrences = text.matches(&marker).count();
        if occurrences > 0 {
            text = text.replace(&marker, value);
        }
        debug!("Replaced {occurrences} occurrence(s) of {marker}");

        let not_found = match check {
            NotFoundCheck::ValuePresence => !text.contains(value),
            NotFoundCheck::MarkerOccurrence => occurrences == 0,
        };
        if not_found {
            warnings.push(warning(
                WarningKind::VariableNotFoundInTemplate,
                messages::variable_not_found(key),
            ));
        }
    }

    ParsedTemplate::new(text, warnings)
}

fn add_not_replaced_warnings(parsed: ParsedTemplate) -> ParsedTemplate {
    let leftovers: Vec<TemplateWarning> = scan_markers(parsed.text())
        .into_iter()
        .map(|marker| {
            warning(
                WarningKind::VariableNotReplaced,
                messages::variable_not_replaced(&marker.name),
            )
        })
        .collect();

    if leftovers.is_empty() {
        return parsed;
    }
    parsed.with_warnings(leftovers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_variable() {
        let vars = Variables::from([("name", "John")]);
        let parsed = substitute(Some("Hello, ${name}!"), Some(&vars));
        assert_eq!(parsed.text(), "Hello, John!");
        assert!(parsed.is_clean());
    }

    #[test]
    fn test_unused_variable_is_reported() {
        let vars = Variables::from([("user", "John"), ("age", "35")]);
        let parsed = substitute(Some("${user}"), Some(&vars));
        assert_eq!(parsed.text(), "John");
        assert_eq!(parsed.messages(), vec!["Variable age not found in template"]);
        assert_eq!(parsed.warnings()[0].kind(), WarningKind::VariableNotFoundInTemplate);
    }

    #[test]
    fn test_leftover_markers_reported_in_order() {
        let parsed = substitute(Some("${user} ${age}"), Some(&Variables::new()));
        assert_eq!(parsed.text(), "${user} ${age}");
        assert_eq!(
            parsed.messages(),
            vec!["Variable user was no replaced", "Variable age was no replaced"]
        );
    }

    #[test]
    fn test_missing_template() {
        let parsed = substitute(None, Some(&Variables::new()));
        assert_eq!(parsed.text(), "");
        assert_eq!(parsed.messages(), vec!["Text is not defined"]);
        assert_eq!(parsed.warnings()[0].kind(), WarningKind::TemplateUndefined);
    }

    #[test]
    fn test_missing_template_wins_over_missing_variables() {
        let parsed = substitute(None, None);
        assert_eq!(parsed.messages(), vec!["Text is not defined"]);
    }

    #[test]
    fn test_missing_variables_keeps_template() {
        let parsed = substitute(Some("text ${x}"), None);
        assert_eq!(parsed.text(), "text ${x}");
        assert_eq!(parsed.messages(), vec!["Variables is not defined"]);
    }

    #[test]
    fn test_repeated_marker_replaced_everywhere() {
        let vars = Variables::from([("variable", "foo")]);
        let parsed = substitute(Some("${variable} and ${variable}"), Some(&vars));
        assert_eq!(parsed.text(), "foo and foo");
        assert!(parsed.is_clean());
    }

    #[test]
    fn test_key_is_not_a_pattern() {
        let vars = Variables::from([("a.b", "x")]);
        let parsed = substitute(Some("${a.b} ${aXb}"), Some(&vars));
        assert_eq!(parsed.text(), "x ${aXb}");
        assert_eq!(parsed.messages(), vec!["Variable aXb was no replaced"]);
    }

    #[test]
    fn test_value_already_in_text_suppresses_warning() {
        let vars = Variables::from([("name", "John")]);
        let parsed = substitute(Some("John was here"), Some(&vars));
        assert!(parsed.is_clean());
    }

    #[test]
    fn test_marker_occurrence_check_flags_absent_marker() {
        let vars = Variables::from([("name", "John")]);
        let config = EngineConfig::new().with_not_found_check(NotFoundCheck::MarkerOccurrence);
        let parsed = substitute_with(Some("John was here"), Some(&vars), &config);
        assert_eq!(parsed.messages(), vec!["Variable name not found in template"]);
    }

    #[test]
    fn test_marker_occurrence_check_ignores_shared_values() {
        let vars = Variables::from([("a", "x"), ("b", "x")]);
        let config = EngineConfig::new().with_not_found_check(NotFoundCheck::MarkerOccurrence);
        let parsed = substitute_with(Some("${a}"), Some(&vars), &config);
        assert_eq!(parsed.text(), "x");
        assert_eq!(parsed.messages(), vec!["Variable b not found in template"]);

        // the default check only looks for the value, so `b` goes unnoticed
        let parsed = substitute(Some("${a}"), Some(&vars));
        assert!(parsed.is_clean());
    }

    #[test]
    fn test_value_with_marker_syntax_is_not_expanded() {
        let vars = Variables::from([("a", "${b}"), ("b", "B")]);
        let parsed = substitute(Some("${a}"), Some(&vars));
        // `b` is processed after `a`, so the inserted marker is replaced too
        assert_eq!(parsed.text(), "B");

        let vars = Variables::from([("b", "B"), ("a", "${b}")]);
        let parsed = substitute(Some("${a}"), Some(&vars));
        assert_eq!(parsed.text(), "${b}");
        assert_eq!(
            parsed.messages(),
            vec!["Variable b not found in template", "Variable b was no replaced"]
        );
    }

    #[test]
    fn test_render_text() {
        let vars = Variables::from([("variable", "foo"), ("anotherVariable", "bar")]);
        assert_eq!(
            render_text("with ${variable} and ${anotherVariable} and ${other}", &vars),
            "with foo and bar and ${other}"
        );
    }
}
