//! Events submitted to a machine.
//!
//! The machine only ever reads an event's type discriminator. Everything
//! else an event carries is passed through untouched to the actions.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Input that may provoke a transition.
///
/// # Example
///
/// ```rust
/// use tinychart::core::Event;
///
/// enum PlayerEvent {
///     Play,
///     Seek { position: u64 },
/// }
///
/// impl Event for PlayerEvent {
///     fn event_type(&self) -> &str {
///         match self {
///             Self::Play => "PLAY",
///             Self::Seek { .. } => "SEEK",
///         }
///     }
/// }
///
/// assert_eq!(PlayerEvent::Seek { position: 3 }.event_type(), "SEEK");
/// ```
pub trait Event {
    /// The discriminator used to look up a transition rule.
    fn event_type(&self) -> &str;
}

impl Event for String {
    fn event_type(&self) -> &str {
        self
    }
}

impl Event for &str {
    fn event_type(&self) -> &str {
        self
    }
}

/// Loosely-typed event: a `type` discriminator plus arbitrary fields.
///
/// Serializes to and from the flat `{ "type": ..., ...fields }` shape.
///
/// # Example
///
/// ```rust
/// use tinychart::core::{Event, JsonEvent};
/// use serde_json::json;
///
/// let event = JsonEvent::new("BUILD_ERROR")
///     .with("level", json!("warning"))
///     .with("messages", json!(["warning-1"]));
///
/// assert_eq!(event.event_type(), "BUILD_ERROR");
/// assert_eq!(event.get("level"), Some(&json!("warning")));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct JsonEvent {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl JsonEvent {
    /// Create an event with no payload fields.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Map::new(),
        }
    }

    /// Add a payload field, replacing any previous value under `key`.
    pub fn with(mut self, key: impl Into<String>, value: Value) -> Self {
        self.fields.insert(key.into(), value);
        self
    }

    /// Look up a payload field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl Event for JsonEvent {
    fn event_type(&self) -> &str {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_events_use_themselves_as_type() {
        assert_eq!("DISMISS".event_type(), "DISMISS");
        assert_eq!(String::from("DISMISS").event_type(), "DISMISS");
    }

    #[test]
    fn json_event_reads_flat_wire_shape() {
        let event: JsonEvent = serde_json::from_value(json!({
            "type": "BUILD_ERROR",
            "level": "warning",
            "messages": ["warning-1"],
        }))
        .unwrap();

        assert_eq!(event.event_type(), "BUILD_ERROR");
        assert_eq!(event.fields.len(), 2);
        assert_eq!(event.get("messages"), Some(&json!(["warning-1"])));
    }

    #[test]
    fn json_event_writes_type_alongside_fields() {
        let event = JsonEvent::new("RUNTIME_ERROR").with("level", json!("error"));

        let value = serde_json::to_value(&event).unwrap();

        assert_eq!(value, json!({ "type": "RUNTIME_ERROR", "level": "error" }));
    }

    #[test]
    fn with_replaces_existing_field() {
        let event = JsonEvent::new("X")
            .with("n", json!(1))
            .with("n", json!(2));

        assert_eq!(event.get("n"), Some(&json!(2)));
        assert!(event.get("missing").is_none());
    }
}
