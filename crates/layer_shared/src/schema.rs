//! Screen schema.
//!
//! The payload delivered by the backend:
//!
//! ```text
//! {
//!   "screen": "login_screen",
//!   "components": [
//!     { "component": "Input", "id": "email", "props": { ... }, "children": [ ... ] }
//!   ]
//! }
//! ```
//!
//! Both types are immutable after parse. Rendered state lives in the
//! engine, never in the schema.
//!
//! Decoding is lenient per node. A missing or non-string `component`
//! reads as the empty tag (rendered as a placeholder), scalar ids are
//! read as text, and `props` or `children` of the wrong shape read as
//! empty. Only a payload that is not JSON, or not an object, fails.

use crate::error::{SchemaError, SchemaResult};
use crate::props::{PropValue, Props};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One node in the screen tree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Type tag selecting rendering behavior.
    #[serde(rename = "component", default, deserialize_with = "scalar_or_empty")]
    pub component_type: String,
    /// Optional stable identifier. Uniqueness is the backend's problem.
    #[serde(default, deserialize_with = "scalar_text", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Flat property bag.
    #[serde(default, deserialize_with = "shape_or_default")]
    pub props: Props,
    /// Children, used by container types.
    #[serde(default, deserialize_with = "component_list", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
}

impl Component {
    /// Creates a component with no id, props or children.
    #[must_use]
    pub fn new(component_type: impl Into<String>) -> Self {
        Self {
            component_type: component_type.into(),
            ..Self::default()
        }
    }

    /// Sets the id.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the props.
    #[must_use]
    pub fn with_props(mut self, props: Props) -> Self {
        self.props = props;
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    /// The id, with absence read as the empty string.
    #[must_use]
    pub fn id_or_empty(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    /// Counts this node and all its descendants.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Component::node_count).sum::<usize>()
    }
}

/// A named, ordered list of top-level components.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScreenDefinition {
    /// Screen name.
    #[serde(rename = "screen", default, deserialize_with = "scalar_or_empty")]
    pub name: String,
    /// Top-level components in display order.
    #[serde(default, deserialize_with = "component_list")]
    pub components: Vec<Component>,
}

impl ScreenDefinition {
    /// Decodes a screen payload.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::EmptyPayload`] for a blank payload and
    /// [`SchemaError::Malformed`] when the JSON does not describe a screen.
    pub fn from_json(json: &str) -> SchemaResult<Self> {
        if json.trim().is_empty() {
            return Err(SchemaError::EmptyPayload);
        }
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes the screen back to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Malformed`] if a number cannot be encoded.
    pub fn to_json(&self) -> SchemaResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Fail-soft decoding: `None` for an empty or malformed payload.
///
/// Never panics across the boundary. Malformed payloads are logged.
#[must_use]
pub fn parse_screen(json: &str) -> Option<ScreenDefinition> {
    match ScreenDefinition::from_json(json) {
        Ok(screen) => Some(screen),
        Err(SchemaError::EmptyPayload) => None,
        Err(err) => {
            tracing::warn!("Discarding screen payload: {}", err);
            None
        }
    }
}

// =============================================================================
// LENIENT FIELDS
// =============================================================================

/// Scalars as text; null, lists and maps as `None`.
fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(PropValue::deserialize(deserializer)?.to_text())
}

fn scalar_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(scalar_text(deserializer)?.unwrap_or_default())
}

/// The field's default when it is null or has the wrong shape.
fn shape_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(T::default());
    }
    Ok(T::deserialize(value).unwrap_or_else(|err| {
        tracing::warn!("Ignoring malformed field: {}", err);
        T::default()
    }))
}

/// A list of nodes. Entries that are not objects become untyped nodes so
/// they still show up as placeholders; a non-list reads as empty.
fn component_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Component>, D::Error> {
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        other => {
            tracing::warn!("Ignoring component list of wrong shape: {}", other);
            return Ok(Vec::new());
        }
    };
    Ok(items
        .into_iter()
        .map(|item| {
            Component::deserialize(item).unwrap_or_else(|err| {
                tracing::warn!("Malformed component rendered as placeholder: {}", err);
                Component::default()
            })
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOGIN: &str = r#"{
        "screen": "login_screen",
        "components": [
            {"component": "Text", "props": {"title": "Welcome"}},
            {"component": "VerticalContainer", "children": [
                {"component": "Input", "id": "email", "props": {"rules": [{"component": "required"}]}},
                {"component": "Button", "id": "go", "props": {"submit": true}}
            ]}
        ]
    }"#;

    #[test]
    fn test_parse_tree() {
        let screen = ScreenDefinition::from_json(LOGIN).unwrap();
        assert_eq!(screen.name, "login_screen");
        assert_eq!(screen.components.len(), 2);
        assert_eq!(screen.components[0].id, None);
        assert_eq!(screen.components[0].props.get_str("title"), Some("Welcome"));
        let container = &screen.components[1];
        assert_eq!(container.children.len(), 2);
        assert_eq!(container.children[0].id_or_empty(), "email");
        assert_eq!(container.node_count(), 3);
    }

    #[test]
    fn test_null_props_and_children() {
        let screen = ScreenDefinition::from_json(
            r#"{"screen": "s", "components": [{"component": "Text", "props": null, "children": null}]}"#,
        )
        .unwrap();
        assert!(screen.components[0].props.is_empty());
        assert!(screen.components[0].children.is_empty());
    }

    #[test]
    fn test_parse_screen_fails_soft() {
        assert!(parse_screen("").is_none());
        assert!(parse_screen("   ").is_none());
        assert!(parse_screen("{not json").is_none());
        assert!(parse_screen("[1, 2]").is_none());
        assert!(parse_screen(LOGIN).is_some());
    }

    #[test]
    fn test_bad_node_stays_local() {
        let screen = parse_screen(
            r#"{"screen": "s", "components": [
                {"component": "Text", "props": {"title": "Hi"}},
                {"id": "typo"},
                {"component": "Text", "id": 5, "props": []},
                {"component": 7, "id": {"nested": true}, "children": "none"},
                "stray",
                {"component": "Input", "id": "email"}
            ]}"#,
        )
        .unwrap();

        let types: Vec<_> = screen.components.iter().map(|c| c.component_type.as_str()).collect();
        assert_eq!(types, vec!["Text", "", "Text", "7", "", "Input"]);
        assert_eq!(screen.components[1].id_or_empty(), "typo");
        assert_eq!(screen.components[2].id.as_deref(), Some("5"));
        assert!(screen.components[2].props.is_empty());
        assert_eq!(screen.components[3].id, None);
        assert!(screen.components[3].children.is_empty());
        assert_eq!(screen.components[5].id_or_empty(), "email");
    }

    #[test]
    fn test_wrong_shaped_screen_fields() {
        let screen = parse_screen(r#"{"screen": 12, "components": {"component": "Text"}}"#).unwrap();
        assert_eq!(screen.name, "12");
        assert!(screen.components.is_empty());
    }

    #[test]
    fn test_empty_payload_error() {
        assert!(matches!(ScreenDefinition::from_json(""), Err(SchemaError::EmptyPayload)));
    }

    #[test]
    fn test_json_round_trip_keeps_keys() {
        let screen = ScreenDefinition::from_json(LOGIN).unwrap();
        let json = screen.to_json().unwrap();
        assert!(json.contains(r#""component":"Input""#));
        assert_eq!(ScreenDefinition::from_json(&json).unwrap(), screen);
    }
}
