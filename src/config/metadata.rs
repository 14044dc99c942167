use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Free-form string settings, such as a release version.
///
/// Backed by an ordered map, so [`keys`](Self::keys) and
/// [`values`](Self::values) list entries in the same key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(BTreeMap<String, String>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the value for `key`, or `""` when the key is absent.
    pub fn get(&self, key: &str) -> &str {
        self.0.get(key).map(String::as_str).unwrap_or_default()
    }

    pub fn keys(&self) -> Vec<&str> {
        self.0.keys().map(String::as_str).collect()
    }

    pub fn values(&self) -> Vec<&str> {
        self.0.values().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_entry() {
        let data: Metadata = [("version", "1.0.0")].into_iter().collect();

        assert_eq!(data.keys(), vec!["version"]);
        assert_eq!(data.values(), vec!["1.0.0"]);
        assert!(data.has("version"));
        assert_eq!(data.get("version"), "1.0.0");
    }

    #[test]
    fn test_missing_key_is_empty() {
        let data = Metadata::new();
        assert!(!data.has("missing"));
        assert_eq!(data.get("missing"), "");
    }

    #[test]
    fn test_keys_and_values_pair_up() {
        let data: Metadata = [("b", "2"), ("a", "1"), ("c", "3")].into_iter().collect();

        let keys = data.keys();
        let values = data.values();
        assert_eq!(keys.len(), values.len());
        for (key, value) in keys.iter().zip(values) {
            assert_eq!(data.get(key), value);
        }
    }

    #[test]
    fn test_decodes_from_json_object() {
        let data: Metadata = serde_json::from_str(r#"{"version": "1.0.0", "env": "prod"}"#).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.get("env"), "prod");
    }
}
