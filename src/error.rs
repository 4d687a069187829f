use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Strict substitution found placeholders with no matching field.
    #[error("The follow fields are not received: [{}]", quote_fields(.fields))]
    MissingFields { fields: Vec<String> },

    /// Diagnostic rendering produced warnings while `deny_warnings` was set.
    #[error("Template rendered with warnings: {}", .0.join("; "))]
    Warnings(Vec<String>),

    #[error("Configuration validation failed: {0}.")]
    ConfigValidation(String),

    #[error("Failed to parse JSON. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),
}

fn quote_fields(fields: &[String]) -> String {
    fields
        .iter()
        .map(|field| format!("'{field}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience type alias for Results with the crate error as the error type.
///
/// # Type Parameters
/// * `T` - The type of the success value
pub type Result<T, E = Error> = std::result::Result<T, E>;
