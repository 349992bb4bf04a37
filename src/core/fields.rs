//! Structured field values and the ordered field map
//!
//! This module provides:
//! - `FieldValue`: closed tagged variant for structured field values
//! - `LogFields`: insertion-ordered key-value fields attached to records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<u32> for FieldValue {
    fn from(i: u32) -> Self {
        FieldValue::Int(i as i64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

/// Insertion-ordered structured fields for a log record.
///
/// Field names are unique; inserting a duplicate key replaces the value in
/// place and keeps the key's original position, so serialized output stays
/// in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogFields {
    entries: Vec<(String, FieldValue)>,
}

impl LogFields {
    /// Create an empty field set
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a field, consuming and returning self for chaining
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.insert(key, value);
        self
    }

    /// Insert a field; a duplicate key replaces the existing value in place
    pub fn insert<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Look up a field by name
    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Iterate fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Merge `overrides` on top of these fields.
    ///
    /// Colliding keys take the override's value but keep this set's
    /// position; non-colliding override keys are appended in their order.
    pub fn merged_with(&self, overrides: &LogFields) -> LogFields {
        let mut merged = self.clone();
        for (key, value) in overrides.iter() {
            merged.insert(key, value.clone());
        }
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for LogFields
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = LogFields::new();
        for (k, v) in iter {
            fields.insert(k, v);
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_creation() {
        let fields = LogFields::new();
        assert!(fields.is_empty());
    }

    #[test]
    fn test_fields_with_values() {
        let fields = LogFields::new()
            .with_field("user_id", 123)
            .with_field("username", "john_doe")
            .with_field("active", true);

        assert_eq!(fields.len(), 3);
        assert_eq!(fields.get("user_id"), Some(&FieldValue::Int(123)));
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let fields = LogFields::new()
            .with_field("attempt", 1)
            .with_field("host", "db-1")
            .with_field("attempt", 2);

        assert_eq!(fields.len(), 2);
        assert_eq!(fields.get("attempt"), Some(&FieldValue::Int(2)));
        // Replacement keeps the key's original position
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["attempt", "host"]);
    }

    #[test]
    fn test_merged_with_override() {
        let base = LogFields::new().with_field("a", 0).with_field("b", 2);
        let caller = LogFields::new().with_field("a", 1);

        let merged = base.merged_with(&caller);
        assert_eq!(merged.get("a"), Some(&FieldValue::Int(1)));
        assert_eq!(merged.get("b"), Some(&FieldValue::Int(2)));
        assert_eq!(merged.len(), 2);
    }

    #[test]
    fn test_merged_with_appends_new_keys() {
        let base = LogFields::new().with_field("service", "api");
        let caller = LogFields::new().with_field("request_id", "abc-123");

        let merged = base.merged_with(&caller);
        let keys: Vec<&str> = merged.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["service", "request_id"]);
    }

    #[test]
    fn test_field_value_display() {
        assert_eq!(FieldValue::from("text").to_string(), "text");
        assert_eq!(FieldValue::from(42).to_string(), "42");
        assert_eq!(FieldValue::Null.to_string(), "null");
    }

    #[test]
    fn test_from_iterator() {
        let fields: LogFields = vec![("k1", "v1"), ("k2", "v2")].into_iter().collect();
        assert_eq!(fields.len(), 2);
    }
}
