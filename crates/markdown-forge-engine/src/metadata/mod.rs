//! # Front Matter Metadata
//!
//! Turns the `key: value` lines of a front matter block into a typed,
//! insertion-ordered map. There is no YAML parser behind this: one line is
//! one entry, split at its first colon, and values are coerced by what the
//! key is called (see [`coerce`]).

pub mod coerce;
pub mod date;

use serde::{Serialize, Serializer, ser::SerializeMap};

/// A typed front matter value. Serializes as the bare inner value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Text(String),
    Number(f64),
    /// Calendar date, `YYYY-MM-DD`.
    Date(String),
    List(Vec<String>),
}

impl MetadataValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::Text(s) | MetadataValue::Date(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            MetadataValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MetadataValue::List(items) => Some(items),
            _ => None,
        }
    }
}

/// Insertion-ordered front matter entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Metadata {
    entries: Vec<(String, MetadataValue)>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse front matter interior lines. Lines without a colon, or with an
    /// empty key or value, are skipped.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let mut metadata = Self::new();
        for line in lines {
            let Some((key, value)) = line.as_ref().trim().split_once(':') else {
                continue;
            };
            let (key, value) = (key.trim(), value.trim());
            if key.is_empty() || value.is_empty() {
                continue;
            }
            metadata.insert(key, coerce::coerce(key, value));
        }
        metadata
    }

    /// Insert a value. A repeated key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: MetadataValue) {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetadataValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn skips_malformed_lines() {
        let metadata = Metadata::from_lines(&["no colon", ": value", "key:", "  ok : yes  "]);
        assert_eq!(metadata.len(), 1);
        assert_eq!(
            metadata.get("ok"),
            Some(&MetadataValue::Text("yes".into()))
        );
    }

    #[test]
    fn value_keeps_later_colons() {
        let metadata = Metadata::from_lines(&["url: https://example.com:8080/a"]);
        assert_eq!(
            metadata.get("url").and_then(MetadataValue::as_str),
            Some("https://example.com:8080/a")
        );
    }

    #[test]
    fn repeated_key_replaces_in_place() {
        let metadata = Metadata::from_lines(&["a: 1", "b: 2", "a: 3"]);
        assert_eq!(metadata.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(metadata.get("a").and_then(MetadataValue::as_number), Some(3.0));
    }

    #[test]
    fn accessors() {
        let list = MetadataValue::List(vec!["x".into()]);
        assert_eq!(list.as_list(), Some(&["x".to_string()][..]));
        assert_eq!(list.as_str(), None);
        assert_eq!(MetadataValue::Date("2024-01-02".into()).as_str(), Some("2024-01-02"));
        assert_eq!(MetadataValue::Number(1.5).as_list(), None);
    }
}
