//! Result types of the diagnostic engine.

use std::fmt::Display;

/// What a warning is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// No template text was supplied.
    TemplateUndefined,
    /// No variable mapping was supplied.
    VariablesUndefined,
    /// A supplied variable did not end up in the output.
    VariableNotFoundInTemplate,
    /// A marker was left in the output unresolved.
    VariableNotReplaced,
}

/// A non-fatal diagnostic. The message is the whole user-facing payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateWarning {
    kind: WarningKind,
    message: String,
}

impl TemplateWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn kind(&self) -> WarningKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for TemplateWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Substituted text together with the warnings produced on the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTemplate {
    text: String,
    warnings: Vec<TemplateWarning>,
}

impl ParsedTemplate {
    pub fn new(text: impl Into<String>, warnings: Vec<TemplateWarning>) -> Self {
        Self { text: text.into(), warnings }
    }

    /// Returns a copy with `warnings` appended after the existing ones.
    pub fn with_warnings(
        &self,
        warnings: impl IntoIterator<Item = TemplateWarning>,
    ) -> Self {
        let mut all = self.warnings.clone();
        all.extend(warnings);
        Self { text: self.text.clone(), warnings: all }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }

    pub fn warnings(&self) -> &[TemplateWarning] {
        &self.warnings
    }

    /// Warning messages in the order they were produced.
    pub fn messages(&self) -> Vec<&str> {
        self.warnings.iter().map(TemplateWarning::message).collect()
    }

    /// True when substitution produced no warnings at all.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
