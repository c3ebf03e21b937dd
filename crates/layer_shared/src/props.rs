//! Loosely-typed property bag.
//!
//! Every component carries a flat map of props. There is no schema per
//! component type: each renderer reads only the keys it understands.
//! Accessors never fail. A missing key or a value of the wrong shape reads
//! as `None`, and callers pick their own default.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single property value.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// JSON `null`.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Any JSON number.
    Number(f64),
    /// String.
    String(String),
    /// Ordered list.
    List(Vec<PropValue>),
    /// Nested map.
    Map(Props),
}

impl PropValue {
    /// Returns the string slice if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number if this is a number.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the nested map if this is a map.
    #[must_use]
    pub fn as_map(&self) -> Option<&Props> {
        match self {
            Self::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Renders scalars as text. Lists, maps and null have no text form.
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        match self {
            Self::String(s) => Some(s.clone()),
            Self::Bool(b) => Some(b.to_string()),
            Self::Number(n) => Some(format_number(*n)),
            Self::Null | Self::List(_) | Self::Map(_) => None,
        }
    }

    /// Permissive boolean reading: numbers are true when non-zero,
    /// strings when they spell `true` in any case.
    #[must_use]
    pub fn to_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Number(n) => Some(*n != 0.0),
            Self::String(s) => Some(s.eq_ignore_ascii_case("true")),
            Self::Null | Self::List(_) | Self::Map(_) => None,
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for PropValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for PropValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<Vec<PropValue>> for PropValue {
    fn from(value: Vec<PropValue>) -> Self {
        Self::List(value)
    }
}

impl From<Props> for PropValue {
    fn from(value: Props) -> Self {
        Self::Map(value)
    }
}

/// The property bag of one component.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Props(HashMap<String, PropValue>);

impl Props {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<PropValue>) {
        self.0.insert(key.into(), value.into());
    }

    /// Raw access.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.0.get(key)
    }

    /// True if the key is present, even with a `null` value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if there are no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over all entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &PropValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// String value only; numbers and bools read as `None`.
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropValue::as_str)
    }

    /// Any scalar rendered as text.
    #[must_use]
    pub fn get_string(&self, key: &str) -> Option<String> {
        self.get(key).and_then(PropValue::to_text)
    }

    /// Permissive boolean, see [`PropValue::to_bool`].
    #[must_use]
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(PropValue::to_bool)
    }

    /// Strict boolean: only a JSON `true` or `false` counts.
    #[must_use]
    pub fn get_flag(&self, key: &str) -> Option<bool> {
        match self.get(key) {
            Some(PropValue::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// True only when the key reads as boolean `true`.
    #[must_use]
    pub fn is_truthy(&self, key: &str) -> bool {
        self.get_bool(key) == Some(true)
    }

    /// Integer from a number (truncated) or a numeric string.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn get_i32(&self, key: &str) -> Option<i32> {
        match self.get(key)? {
            PropValue::Number(n) if n.is_finite() => Some(*n as i32),
            PropValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Float from a number or a numeric string.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn get_f32(&self, key: &str) -> Option<f32> {
        match self.get(key)? {
            PropValue::Number(n) => Some(*n as f32),
            PropValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// List value.
    #[must_use]
    pub fn get_list(&self, key: &str) -> Option<&[PropValue]> {
        match self.get(key)? {
            PropValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Nested map value.
    #[must_use]
    pub fn get_map(&self, key: &str) -> Option<&Props> {
        self.get(key).and_then(PropValue::as_map)
    }

    /// List of scalars rendered as text; other entries are dropped.
    #[must_use]
    pub fn get_string_list(&self, key: &str) -> Vec<String> {
        self.get_list(key)
            .map(|items| items.iter().filter_map(PropValue::to_text).collect())
            .unwrap_or_default()
    }
}

impl<K: Into<String>, V: Into<PropValue>> FromIterator<(K, V)> for Props {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Props {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_untagged_values() {
        let props = parse(r#"{"a": 1.5, "b": "x", "c": true, "d": null, "e": [1, "y"], "f": {"g": 2}}"#);
        assert_eq!(props.get("a"), Some(&PropValue::Number(1.5)));
        assert_eq!(props.get_str("b"), Some("x"));
        assert_eq!(props.get_flag("c"), Some(true));
        assert_eq!(props.get("d"), Some(&PropValue::Null));
        assert_eq!(props.get_list("e").map(<[PropValue]>::len), Some(2));
        assert_eq!(props.get_map("f").and_then(|m| m.get_i32("g")), Some(2));
    }

    #[test]
    fn test_permissive_bool() {
        let props = parse(r#"{"a": "TRUE", "b": "yes", "c": 1, "d": 0, "e": false}"#);
        assert_eq!(props.get_bool("a"), Some(true));
        assert_eq!(props.get_bool("b"), Some(false));
        assert_eq!(props.get_bool("c"), Some(true));
        assert_eq!(props.get_bool("d"), Some(false));
        assert!(!props.is_truthy("e"));
        assert!(!props.is_truthy("missing"));
        assert_eq!(props.get_flag("a"), None);
    }

    #[test]
    fn test_numbers_fail_soft() {
        let props = parse(r#"{"a": 12.9, "b": " 7 ", "c": "seven", "d": [1]}"#);
        assert_eq!(props.get_i32("a"), Some(12));
        assert_eq!(props.get_i32("b"), Some(7));
        assert_eq!(props.get_i32("c"), None);
        assert_eq!(props.get_i32("d"), None);
        assert_eq!(props.get_f32("b"), Some(7.0));
    }

    #[test]
    fn test_text_rendering() {
        let props = parse(r#"{"a": 3, "b": 2.5, "c": false, "d": {"x": 1}}"#);
        assert_eq!(props.get_string("a").as_deref(), Some("3"));
        assert_eq!(props.get_string("b").as_deref(), Some("2.5"));
        assert_eq!(props.get_string("c").as_deref(), Some("false"));
        assert_eq!(props.get_string("d"), None);
        assert_eq!(props.get_str("a"), None);
    }

    #[test]
    fn test_string_list_drops_non_scalars() {
        let props = parse(r#"{"items": ["News", 2, {"x": 1}, null]}"#);
        assert_eq!(props.get_string_list("items"), vec!["News", "2"]);
        assert!(props.get_string_list("missing").is_empty());
    }

    #[test]
    fn test_builder() {
        let props = Props::new().with("submit", true).with("min", 3).with("title", "Hi");
        assert_eq!(props.len(), 3);
        assert!(props.is_truthy("submit"));
        assert_eq!(props.get_i32("min"), Some(3));
    }
}
