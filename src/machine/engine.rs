//! State machine that dispatches events through a state chart.

use crate::core::{Context, Event, StateChart, StateHistory, StateNode, StateTransition};
use crate::machine::actions::ActionTable;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, trace};

/// Running instance of a state chart.
///
/// Holds the current state name and context. Both change only through
/// [`send`](Self::send).
///
/// # Example
///
/// ```rust
/// use tinychart::core::{StateChart, StateNode, TransitionRule};
/// use tinychart::machine::{ActionTable, Machine};
/// use serde_json::{json, Map, Value};
///
/// let chart = StateChart::new("idle", Map::new())
///     .state("idle", StateNode::new().on("START", TransitionRule::new("running").action("stamp")))
///     .state("running", StateNode::new());
///
/// let actions = ActionTable::new().with("stamp", |_ctx: &Map<String, Value>, event: &&str| {
///     let mut patch = Map::new();
///     patch.insert("started_by".into(), json!(event));
///     Some(patch)
/// });
///
/// let mut machine = Machine::new(chart, actions);
/// machine.send("START");
///
/// assert_eq!(machine.state(), "running");
/// assert_eq!(machine.context().get("started_by"), Some(&json!("START")));
/// ```
pub struct Machine<C: Context, E> {
    states: HashMap<String, StateNode>,
    actions: Arc<ActionTable<C, E>>,
    current: String,
    context: C,
    history: StateHistory,
}

impl<C: Context, E: Event> Machine<C, E> {
    /// Create a machine in the chart's initial state with its initial context.
    ///
    /// Nothing is validated: an unknown initial state, dangling targets or
    /// unregistered action names are all accepted.
    pub fn new(chart: StateChart<C>, actions: impl Into<Arc<ActionTable<C, E>>>) -> Self {
        let StateChart {
            initial,
            context,
            states,
        } = chart;

        debug!(initial = %initial, states = states.len(), "machine created");

        Self {
            states,
            actions: actions.into(),
            current: initial,
            context,
            history: StateHistory::new(),
        }
    }

    /// Keep at most `limit` transition records (0 disables the log).
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history.set_limit(limit);
        self
    }

    /// Name of the current state (pure)
    pub fn state(&self) -> &str {
        &self.current
    }

    /// Current context (pure)
    pub fn context(&self) -> &C {
        &self.context
    }

    /// Transition log (pure)
    pub fn history(&self) -> &StateHistory {
        &self.history
    }

    /// The action table this machine dispatches to.
    pub fn actions(&self) -> &Arc<ActionTable<C, E>> {
        &self.actions
    }

    /// Submit an event.
    ///
    /// If the current state has a rule for the event's type, the machine
    /// moves to the rule's target and then runs the rule's actions in
    /// order, merging each returned patch into the context before the
    /// next action sees it. Otherwise nothing happens.
    ///
    /// Never fails: unhandled events are ignored and unregistered action
    /// names are skipped.
    pub fn send(&mut self, event: E) {
        let event_type = event.event_type();

        let Some(rule) = self
            .states
            .get(&self.current)
            .and_then(|node| node.rule(event_type))
        else {
            trace!(state = %self.current, event = event_type, "no transition for event");
            return;
        };

        let from = std::mem::replace(&mut self.current, rule.target.clone());
        debug!(from = %from, to = %self.current, event = event_type, "transition");

        self.history.record(StateTransition {
            from,
            to: rule.target.clone(),
            event: event_type.to_string(),
            timestamp: Utc::now(),
        });

        for name in &rule.actions {
            let Some(action) = self.actions.get(name) else {
                trace!(action = %name, "action not registered, skipping");
                continue;
            };
            if let Some(patch) = action(&self.context, &event) {
                self.context.apply(patch);
            }
        }
    }
}

impl<C: Context, E> std::fmt::Debug for Machine<C, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("context", &self.context)
            .field("states", &self.states.len())
            .field("actions", &self.actions)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TransitionRule;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    crate::context_struct! {
        #[derive(PartialEq)]
        struct Counter {
            count: u32,
            label: String,
        }
        patch: CounterPatch
    }

    fn counter() -> Counter {
        Counter {
            count: 0,
            label: "start".to_string(),
        }
    }

    fn toggle_chart() -> StateChart<Counter> {
        StateChart::new("off", counter())
            .state(
                "off",
                StateNode::new().on("TOGGLE", TransitionRule::new("on").actions(["increment"])),
            )
            .state(
                "on",
                StateNode::new()
                    .on("TOGGLE", TransitionRule::new("off"))
                    .on("STAY", TransitionRule::new("on")),
            )
    }

    fn increment() -> ActionTable<Counter, &'static str> {
        ActionTable::new().with("increment", |ctx: &Counter, _event: &&str| {
            Some(CounterPatch {
                count: Some(ctx.count + 1),
                ..Default::default()
            })
        })
    }

    #[test]
    fn starts_in_initial_state() {
        let machine = Machine::new(toggle_chart(), increment());

        assert_eq!(machine.state(), "off");
        assert_eq!(machine.context(), &counter());
        assert!(machine.history().is_empty());
    }

    #[test]
    fn matching_event_moves_to_target_and_runs_actions() {
        let mut machine = Machine::new(toggle_chart(), increment());

        machine.send("TOGGLE");

        assert_eq!(machine.state(), "on");
        assert_eq!(machine.context().count, 1);
        assert_eq!(machine.context().label, "start");
    }

    #[test]
    fn unknown_event_is_ignored() {
        let mut machine = Machine::new(toggle_chart(), increment());

        machine.send("EXPLODE");

        assert_eq!(machine.state(), "off");
        assert_eq!(machine.context(), &counter());
        assert!(machine.history().is_empty());
    }

    #[test]
    fn self_transition_without_actions_counts_as_transition() {
        let mut machine = Machine::new(toggle_chart(), increment());
        machine.send("TOGGLE");
        let before = machine.context().clone();

        machine.send("STAY");

        assert_eq!(machine.state(), "on");
        assert_eq!(machine.context(), &before);
        assert_eq!(machine.history().len(), 2);
        assert!(machine.history().last().unwrap().is_reentry());
    }

    #[test]
    fn missing_action_is_skipped_and_rest_still_run() {
        let chart = StateChart::new("a", counter()).state(
            "a",
            StateNode::new().on(
                "GO",
                TransitionRule::new("b").actions(["increment", "nope", "increment"]),
            ),
        );
        let mut machine = Machine::new(chart, increment());

        machine.send("GO");

        assert_eq!(machine.state(), "b");
        assert_eq!(machine.context().count, 2);
    }

    #[test]
    fn dangling_target_makes_every_later_event_a_noop() {
        let chart = StateChart::new("a", counter()).state(
            "a",
            StateNode::new().on("GO", TransitionRule::new("ghost").action("increment")),
        );
        let mut machine = Machine::new(chart, increment());

        machine.send("GO");
        assert_eq!(machine.state(), "ghost");
        assert_eq!(machine.context().count, 1);

        machine.send("GO");
        assert_eq!(machine.state(), "ghost");
        assert_eq!(machine.context().count, 1);
    }

    #[test]
    fn unknown_initial_state_ignores_events() {
        let mut machine = Machine::new(StateChart::new("void", counter()), increment());

        machine.send("TOGGLE");

        assert_eq!(machine.state(), "void");
        assert_eq!(machine.context(), &counter());
    }

    #[test]
    fn actions_see_result_of_previous_action() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_in_action = Arc::clone(&seen);
        let actions = increment().with("observe", move |ctx: &Counter, _event: &&str| {
            seen_in_action.lock().unwrap().push(ctx.count);
            None
        });
        let chart = StateChart::new("a", counter()).state(
            "a",
            StateNode::new().on(
                "GO",
                TransitionRule::new("a").actions(["observe", "increment", "observe"]),
            ),
        );
        let mut machine = Machine::new(chart, actions);

        machine.send("GO");

        assert_eq!(*seen.lock().unwrap(), vec![0, 1]);
    }

    #[test]
    fn action_table_is_shared_between_machines() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counted = Arc::clone(&calls);
        let actions = Arc::new(ActionTable::<Counter, &str>::new().with(
            "increment",
            move |ctx: &Counter, _event: &&str| {
                counted.fetch_add(1, Ordering::SeqCst);
                Some(CounterPatch {
                    count: Some(ctx.count + 1),
                    ..Default::default()
                })
            },
        ));

        let mut first = Machine::new(toggle_chart(), Arc::clone(&actions));
        let mut second = Machine::new(toggle_chart(), Arc::clone(&actions));
        first.send("TOGGLE");

        assert_eq!(first.state(), "on");
        assert_eq!(second.state(), "off");
        assert_eq!(second.context().count, 0);

        second.send("TOGGLE");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(Arc::ptr_eq(first.actions(), second.actions()));
    }

    #[test]
    fn history_records_each_transition() {
        let mut machine = Machine::new(toggle_chart(), increment());

        machine.send("TOGGLE");
        machine.send("NOPE");
        machine.send("TOGGLE");

        assert_eq!(machine.history().get_path(), vec!["off", "on", "off"]);
        let events: Vec<_> = machine
            .history()
            .transitions()
            .map(|t| t.event.as_str())
            .collect();
        assert_eq!(events, vec!["TOGGLE", "TOGGLE"]);
    }

    #[test]
    fn history_limit_is_configurable() {
        let mut machine = Machine::new(toggle_chart(), increment()).with_history_limit(1);

        machine.send("TOGGLE");
        machine.send("TOGGLE");

        assert_eq!(machine.history().len(), 1);
        assert_eq!(machine.history().get_path(), vec!["on", "off"]);
    }

    #[test]
    fn debug_output_names_current_state() {
        let machine = Machine::new(toggle_chart(), increment());

        let rendered = format!("{machine:?}");

        assert!(rendered.contains(r#"current: "off""#));
        assert!(rendered.contains("increment"));
    }
}
