//! Semantic events emitted by the engine.
//!
//! The host pattern-matches on these: navigation on `Action`, analytics
//! logging on `Analytics`, form completion on `Submit`.
//! They carry no element handles, so they can cross threads or be
//! forwarded as JSON.

use serde::{Deserialize, Serialize};

/// Event type discriminator
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    /// Plain click
    Click = 0,
    /// Input value changed
    Change = 1,
    /// Form submitted after passing validation
    Submit = 2,
    /// Analytics hook
    Analytics = 3,
    /// Host action
    Action = 4,
}

/// Events flowing from the engine to the host
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum UiEvent {
    /// A clickable element was activated
    Click {
        /// Component id
        component_id: String,
    },

    /// An input's text changed
    Change {
        /// Component id
        component_id: String,
        /// New text
        value: String,
    },

    /// A submit trigger passed full-form validation
    Submit {
        /// Id of the submit trigger
        screen_id: String,
    },

    /// Analytics event requested by the screen
    Analytics {
        /// Event name
        event_name: String,
    },

    /// Host-level intent (`navigate:back`, `menu:open`, ...)
    Action {
        /// Component id
        component_id: String,
        /// Opaque action string
        action: String,
    },
}

impl UiEvent {
    /// Creates a click event.
    #[must_use]
    pub fn click(component_id: impl Into<String>) -> Self {
        Self::Click {
            component_id: component_id.into(),
        }
    }

    /// Creates a change event.
    #[must_use]
    pub fn change(component_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Change {
            component_id: component_id.into(),
            value: value.into(),
        }
    }

    /// Creates a submit event.
    #[must_use]
    pub fn submit(screen_id: impl Into<String>) -> Self {
        Self::Submit {
            screen_id: screen_id.into(),
        }
    }

    /// Creates an analytics event.
    #[must_use]
    pub fn analytics(event_name: impl Into<String>) -> Self {
        Self::Analytics {
            event_name: event_name.into(),
        }
    }

    /// Creates an action event.
    #[must_use]
    pub fn action(component_id: impl Into<String>, action: impl Into<String>) -> Self {
        Self::Action {
            component_id: component_id.into(),
            action: action.into(),
        }
    }

    /// Returns the event type
    #[must_use]
    pub const fn event_type(&self) -> EventType {
        match self {
            Self::Click { .. } => EventType::Click,
            Self::Change { .. } => EventType::Change,
            Self::Submit { .. } => EventType::Submit,
            Self::Analytics { .. } => EventType::Analytics,
            Self::Action { .. } => EventType::Action,
        }
    }

    /// Returns the originating component (if any)
    #[must_use]
    pub fn component_id(&self) -> Option<&str> {
        match self {
            Self::Click { component_id }
            | Self::Change { component_id, .. }
            | Self::Action { component_id, .. } => Some(component_id),
            Self::Submit { screen_id } => Some(screen_id),
            Self::Analytics { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type() {
        let event = UiEvent::action("header", "navigate:back");
        assert_eq!(event.event_type(), EventType::Action);
        assert_eq!(UiEvent::submit("go").event_type(), EventType::Submit);
    }

    #[test]
    fn test_component_id() {
        assert_eq!(UiEvent::change("email", "a@b.c").component_id(), Some("email"));
        assert_eq!(UiEvent::analytics("login_view").component_id(), None);
    }

    #[test]
    fn test_tagged_json() {
        let json = serde_json::to_string(&UiEvent::click("card")).unwrap();
        assert_eq!(json, r#"{"type":"Click","component_id":"card"}"#);
        let back: UiEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, UiEvent::click("card"));
    }
}
