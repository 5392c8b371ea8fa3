//! Transition log tracking.
//!
//! Records each transition a machine takes, with the event that caused
//! it and a timestamp. The log is bounded: once full, the oldest record
//! is dropped for every new one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Number of records a machine keeps unless configured otherwise.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Record of a single transition.
///
/// # Example
///
/// ```rust
/// use tinychart::core::StateTransition;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: "hidden".to_string(),
///     to: "displayBuildError".to_string(),
///     event: "BUILD_ERROR".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert!(!transition.is_reentry());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// The state being left
    pub from: String,
    /// The state being entered
    pub to: String,
    /// Type of the event that fired the transition
    pub event: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

impl StateTransition {
    /// True when the transition re-entered the state it left.
    pub fn is_reentry(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered, bounded log of transitions.
///
/// # Example
///
/// ```rust
/// use tinychart::core::{StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_limit(10);
///
/// history.record(StateTransition {
///     from: "a".into(),
///     to: "b".into(),
///     event: "NEXT".into(),
///     timestamp: Utc::now(),
/// });
/// history.record(StateTransition {
///     from: "b".into(),
///     to: "c".into(),
///     event: "NEXT".into(),
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.get_path(), vec!["a", "b", "c"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: VecDeque<StateTransition>,
    limit: usize,
}

impl Default for StateHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl StateHistory {
    /// Create an empty history holding at most [`DEFAULT_HISTORY_LIMIT`] records.
    pub fn new() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }

    /// Create an empty history holding at most `limit` records.
    ///
    /// A limit of zero disables recording.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::new(),
            limit,
        }
    }

    /// Maximum number of retained records.
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Change the limit, dropping the oldest records if over it.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.evict();
    }

    /// Append a transition, evicting the oldest record when full.
    pub fn record(&mut self, transition: StateTransition) {
        if self.limit == 0 {
            return;
        }
        self.transitions.push_back(transition);
        self.evict();
    }

    fn evict(&mut self) {
        while self.transitions.len() > self.limit {
            self.transitions.pop_front();
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained record followed by
    /// the `to` state of every record. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from.as_str());
        }
        path.extend(self.transitions.iter().map(|t| t.to.as_str()));
        path
    }

    /// Time between the oldest and newest retained records.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        let elapsed = last.timestamp.signed_duration_since(first.timestamp);
        elapsed.to_std().ok()
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.back()
    }

    /// Iterate over retained transitions, oldest first.
    pub fn transitions(&self) -> impl Iterator<Item = &StateTransition> {
        self.transitions.iter()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
