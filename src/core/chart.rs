//! Declarative state chart definitions.
//!
//! A chart names the initial state, the initial context, and for each
//! state the events it reacts to. Charts are plain data: they can be
//! assembled in code or deserialized from JSON.

use crate::builder::{BuildError, StateChartBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

/// What happens when a state receives a given event type.
///
/// `target` is not checked against the chart. A rule pointing at an
/// unknown state is accepted, and the machine then ignores every later
/// event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionRule {
    /// State entered when the rule fires.
    pub target: String,
    /// Names of the actions to run, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub actions: Vec<String>,
}

impl TransitionRule {
    /// A rule moving to `target` without running any action.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            actions: Vec::new(),
        }
    }

    /// Append one action name.
    pub fn action(mut self, name: impl Into<String>) -> Self {
        self.actions.push(name.into());
        self
    }

    /// Append several action names, keeping their order.
    pub fn actions<I, N>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        self.actions.extend(names.into_iter().map(Into::into));
        self
    }
}

/// A single state: the event types it handles.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateNode {
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub on: HashMap<String, TransitionRule>,
}

impl StateNode {
    /// A state that ignores every event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle `event_type` with `rule`. A later call for the same event
    /// type replaces the earlier rule.
    pub fn on(mut self, event_type: impl Into<String>, rule: TransitionRule) -> Self {
        self.on.insert(event_type.into(), rule);
        self
    }

    /// The rule for `event_type`, if this state handles it.
    pub fn rule(&self, event_type: &str) -> Option<&TransitionRule> {
        self.on.get(event_type)
    }
}

/// Complete machine definition: initial state, initial context, states.
///
/// # Example
///
/// ```rust
/// use tinychart::core::{StateChart, StateNode, TransitionRule};
///
/// let chart = StateChart::new("idle", 0u32)
///     .state("idle", StateNode::new().on("START", TransitionRule::new("running")))
///     .state("running", StateNode::new());
///
/// assert_eq!(chart.initial, "idle");
/// assert!(chart.node("running").is_some());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateChart<C> {
    pub initial: String,
    pub context: C,
    #[serde(default)]
    pub states: HashMap<String, StateNode>,
}

impl<C> StateChart<C> {
    /// A chart with no states yet.
    pub fn new(initial: impl Into<String>, context: C) -> Self {
        Self {
            initial: initial.into(),
            context,
            states: HashMap::new(),
        }
    }

    /// Start a fluent builder.
    pub fn builder() -> StateChartBuilder<C> {
        StateChartBuilder::new()
    }

    /// Add or replace the state called `name`.
    pub fn state(mut self, name: impl Into<String>, node: StateNode) -> Self {
        self.states.insert(name.into(), node);
        self
    }

    /// Look up a state by name.
    pub fn node(&self, name: &str) -> Option<&StateNode> {
        self.states.get(name)
    }
}

impl<C: DeserializeOwned> StateChart<C> {
    /// Parse a chart from its JSON form.
    ///
    /// Only the JSON structure is checked. Targets and action names are
    /// taken as written.
    ///
    /// ```rust
    /// use tinychart::core::StateChart;
    /// use serde_json::{Map, Value};
    ///
    /// let chart: StateChart<Map<String, Value>> = StateChart::from_json(r#"{
    ///     "initial": "hidden",
    ///     "context": { "level": "error" },
    ///     "states": {
    ///         "hidden": { "on": { "SHOW": { "target": "shown" } } },
    ///         "shown": {}
    ///     }
    /// }"#).unwrap();
    ///
    /// assert_eq!(chart.initial, "hidden");
    /// assert!(chart.node("shown").unwrap().on.is_empty());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a chart from a JSON byte stream, such as an open file.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, BuildError> {
        Ok(serde_json::from_reader(reader)?)
    }
}
