//! Builder for constructing state charts.

use crate::builder::error::BuildError;
use crate::core::{StateChart, StateNode, TransitionRule};
use std::collections::HashMap;

/// Builder for constructing state charts with a fluent API.
///
/// # Example
///
/// ```rust
/// use tinychart::builder::StateChartBuilder;
/// use tinychart::core::{StateNode, TransitionRule};
///
/// let chart = StateChartBuilder::new()
///     .initial("locked")
///     .context(0u32)
///     .state("locked", StateNode::new().on("COIN", TransitionRule::new("unlocked")))
///     .transition("unlocked", "PUSH", TransitionRule::new("locked").action("count"))
///     .build()
///     .unwrap();
///
/// assert_eq!(chart.states.len(), 2);
/// ```
pub struct StateChartBuilder<C> {
    initial: Option<String>,
    context: Option<C>,
    states: HashMap<String, StateNode>,
}

impl<C> StateChartBuilder<C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            context: None,
            states: HashMap::new(),
        }
    }

    /// Set the initial state name (required).
    pub fn initial(mut self, name: impl Into<String>) -> Self {
        self.initial = Some(name.into());
        self
    }

    /// Set the initial context (required).
    pub fn context(mut self, context: C) -> Self {
        self.context = Some(context);
        self
    }

    /// Add a state, replacing any state already registered under `name`.
    pub fn state(mut self, name: impl Into<String>, node: StateNode) -> Self {
        self.states.insert(name.into(), node);
        self
    }

    /// Add one rule to a state, creating the state if needed.
    pub fn transition(
        mut self,
        state: impl Into<String>,
        event_type: impl Into<String>,
        rule: TransitionRule,
    ) -> Self {
        self.states
            .entry(state.into())
            .or_default()
            .on
            .insert(event_type.into(), rule);
        self
    }

    /// Build the chart.
    /// Returns an error if the initial state or context is missing.
    pub fn build(self) -> Result<StateChart<C>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let context = self.context.ok_or(BuildError::MissingContext)?;

        Ok(StateChart {
            initial,
            context,
            states: self.states,
        })
    }
}

impl<C> Default for StateChartBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
