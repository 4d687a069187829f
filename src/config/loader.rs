//! Configuration parsing and validation

use crate::config::types::{MatchMode, NotFoundCheck, Policy};
use crate::error::{Error, Result};
use serde::Deserialize;

/// Settings shared by both engines and the renderers built on them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub policy: Policy,
    pub not_found_check: NotFoundCheck,
    pub match_mode: MatchMode,
    /// Turn diagnostic warnings into a render error
    pub deny_warnings: bool,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_not_found_check(mut self, check: NotFoundCheck) -> Self {
        self.not_found_check = check;
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn with_deny_warnings(mut self, deny: bool) -> Self {
        self.deny_warnings = deny;
        self
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.deny_warnings && self.policy == Policy::Strict {
            return Err(Error::ConfigValidation(
                "deny_warnings only applies to the diagnostic policy".into(),
            ));
        }
        Ok(())
    }

    /// Parses and validates a configuration from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: EngineConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a configuration from a YAML document.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let config: EngineConfig = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}
