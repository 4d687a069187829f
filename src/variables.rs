//! Ordered variable mapping used as substitution input.

use crate::error::Result;
use indexmap::IndexMap;
use serde::Deserialize;

/// Variable name to replacement value, iterated in insertion order.
///
/// Order only decides the order of diagnostics and, for the strict engine,
/// which field wins when several could match one marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Variables(IndexMap<String, String>);

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a variable, returning the previous value for the key if any.
    /// An existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parses a JSON object of string values, keeping document order.
    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Parses a YAML mapping of string values, keeping document order.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl<K, V> FromIterator<(K, V)> for Variables
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Variables
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_is_kept() {
        let vars = Variables::from([("b", "2"), ("a", "1"), ("c", "3")]);
        let keys: Vec<&str> = vars.keys().collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reinsert_keeps_position() {
        let mut vars = Variables::from([("user", "John"), ("age", "35")]);
        assert_eq!(vars.insert("user", "Jane"), Some("John".to_string()));
        let pairs: Vec<(&str, &str)> = vars.iter().collect();
        assert_eq!(pairs, vec![("user", "Jane"), ("age", "35")]);
    }

    #[test]
    fn test_from_json_str_preserves_order() {
        let vars = Variables::from_json_str(r#"{"zeta": "z", "alpha": "a"}"#).unwrap();
        let keys: Vec<&str> = vars.keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert_eq!(vars.get("alpha"), Some("a"));
    }

    #[test]
    fn test_from_yaml_str() {
        let vars = Variables::from_yaml_str("name: John\ngreeting: Hello\n").unwrap();
        assert_eq!(vars.len(), 2);
        assert_eq!(vars.get("greeting"), Some("Hello"));
    }

    #[test]
    fn test_from_json_str_rejects_non_string_values() {
        assert!(Variables::from_json_str(r#"{"age": 35}"#).is_err());
    }
}
