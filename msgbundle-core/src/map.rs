//! Map-backed Message Source
//!
//! [`MapSource`] keeps its messages in memory. It can be assembled by hand
//! through [`MapSourceBuilder`], collected from key/message pairs, or parsed
//! from a JSON object.

use crate::{BundleError, MessageSource, Result};
use msgbundle_log::debug;
use std::collections::HashMap;

/// An immutable, in-memory message source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapSource {
    messages: HashMap<String, String>,
}

impl MapSource {
    /// Start an empty builder.
    pub fn builder() -> MapSourceBuilder {
        MapSourceBuilder::default()
    }

    /// Parse messages from a JSON object.
    ///
    /// String values become messages. Nested objects are flattened into
    /// dot-separated keys, so `{"errors": {"io": "I/O failed"}}` yields the
    /// key `errors.io`. Numbers, booleans, arrays and nulls are skipped.
    ///
    /// # Example
    ///
    /// ```
    /// use msgbundle_core::MapSource;
    ///
    /// let source = MapSource::from_json(r#"{
    ///     "hello": "Hello!",
    ///     "errors": { "io": "I/O failed" }
    /// }"#).unwrap();
    ///
    /// assert_eq!(source.get("hello"), Some("Hello!"));
    /// assert_eq!(source.get("errors.io"), Some("I/O failed"));
    /// ```
    pub fn from_json(json: &str) -> Result<Self> {
        let root: serde_json::Value = serde_json::from_str(json)?;

        let entries = match root {
            serde_json::Value::Object(entries) => entries,
            other => return Err(BundleError::NotAnObject(json_kind(&other))),
        };

        let mut messages = HashMap::new();
        flatten_into(&mut messages, None, entries);

        debug!("loaded {} messages from JSON", messages.len());
        Ok(Self { messages })
    }

    /// Get a message without copying it.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.messages.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.messages.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

impl MessageSource for MapSource {
    fn lookup(&self, key: &str) -> Option<String> {
        self.messages.get(key).cloned()
    }
}

impl From<HashMap<String, String>> for MapSource {
    fn from(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }
}

impl<K, V> FromIterator<(K, V)> for MapSource
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            messages: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Accumulates messages for a [`MapSource`].
///
/// Later `put`s for the same key replace earlier ones.
#[derive(Debug, Clone, Default)]
pub struct MapSourceBuilder {
    messages: HashMap<String, String>,
}

impl MapSourceBuilder {
    /// Add one message.
    pub fn put(mut self, key: impl Into<String>, message: impl Into<String>) -> Self {
        self.messages.insert(key.into(), message.into());
        self
    }

    /// Add every pair from `entries`.
    pub fn put_all<K, V>(mut self, entries: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.messages
            .extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn build(self) -> MapSource {
        MapSource {
            messages: self.messages,
        }
    }
}

fn flatten_into(
    messages: &mut HashMap<String, String>,
    prefix: Option<&str>,
    entries: serde_json::Map<String, serde_json::Value>,
) {
    for (key, value) in entries {
        let key = match prefix {
            Some(prefix) => format!("{}.{}", prefix, key),
            None => key,
        };

        match value {
            serde_json::Value::String(s) => {
                messages.insert(key, s);
            }
            serde_json::Value::Object(nested) => flatten_into(messages, Some(&key), nested),
            _ => {}
        }
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_put() {
        let source = MapSource::builder()
            .put("a", "Apple")
            .put("b", "Banana")
            .put("a", "Apricot")
            .build();

        assert_eq!(source.len(), 2);
        assert_eq!(source.get("a"), Some("Apricot"));
        assert_eq!(source.lookup("b"), Some("Banana".to_string()));
        assert_eq!(source.lookup("c"), None);
    }

    #[test]
    fn test_builder_put_all() {
        let source = MapSource::builder()
            .put_all([("x", "1"), ("y", "2")])
            .build();

        let mut keys: Vec<_> = source.keys().collect();
        keys.sort();
        assert_eq!(keys, vec!["x", "y"]);
    }

    #[test]
    fn test_from_iterator() {
        let source: MapSource = vec![("k", "v")].into_iter().collect();
        assert!(source.contains("k"));
        assert!(!source.is_empty());
    }

    #[test]
    fn test_from_json_flattens_nested_objects() {
        let json = r#"{
            "hello": "Hello!",
            "errors": {
                "io": "I/O failed",
                "net": { "timeout": "Timed out" }
            },
            "count": 3,
            "flag": true,
            "list": ["a"],
            "nothing": null
        }"#;

        let source = MapSource::from_json(json).unwrap();

        assert_eq!(source.len(), 3);
        assert_eq!(source.get("hello"), Some("Hello!"));
        assert_eq!(source.get("errors.io"), Some("I/O failed"));
        assert_eq!(source.get("errors.net.timeout"), Some("Timed out"));
        assert_eq!(source.get("count"), None);
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        let err = MapSource::from_json(r#"["a", "b"]"#).unwrap_err();
        assert!(matches!(err, BundleError::NotAnObject("an array")));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let err = MapSource::from_json("{ not json").unwrap_err();
        assert!(matches!(err, BundleError::Json(_)));
        assert!(!err.is_invalid_argument());
    }
}
