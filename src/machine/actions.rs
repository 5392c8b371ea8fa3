//! Named actions run by transitions.

use crate::core::Context;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Type alias for action functions.
///
/// An action receives the context as it stands at that point of the
/// transition and the full event. `Some(patch)` is merged into the
/// context; `None` leaves it untouched. Actions may also perform any
/// side effect the caller needs.
pub type ActionFn<C, E> = Arc<dyn Fn(&C, &E) -> Option<<C as Context>::Patch> + Send + Sync>;

/// Mapping from action name to action function.
///
/// Machines hold the table behind an `Arc`, so one table can serve any
/// number of machines.
///
/// # Example
///
/// ```rust
/// use tinychart::machine::ActionTable;
/// use serde_json::{json, Map, Value};
///
/// let actions = ActionTable::<Map<String, Value>, &str>::new()
///     .with("reset", |_ctx, _event| {
///         let mut patch = Map::new();
///         patch.insert("count".into(), json!(0));
///         Some(patch)
///     })
///     .with("log", |ctx, event| {
///         println!("{event}: {ctx:?}");
///         None
///     });
///
/// assert!(actions.contains("reset"));
/// assert_eq!(actions.len(), 2);
/// ```
pub struct ActionTable<C: Context, E> {
    actions: HashMap<String, ActionFn<C, E>>,
}

impl<C: Context, E> ActionTable<C, E> {
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Register `action` under `name`, replacing any previous entry.
    pub fn insert<F>(&mut self, name: impl Into<String>, action: F)
    where
        F: Fn(&C, &E) -> Option<C::Patch> + Send + Sync + 'static,
    {
        self.actions.insert(name.into(), Arc::new(action));
    }

    /// Fluent form of [`insert`](Self::insert).
    pub fn with<F>(mut self, name: impl Into<String>, action: F) -> Self
    where
        F: Fn(&C, &E) -> Option<C::Patch> + Send + Sync + 'static,
    {
        self.insert(name, action);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ActionFn<C, E>> {
        self.actions.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}

impl<C: Context, E> Default for ActionTable<C, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Context, E> Clone for ActionTable<C, E> {
    fn clone(&self) -> Self {
        Self {
            actions: self.actions.clone(),
        }
    }
}

impl<C: Context, E> fmt::Debug for ActionTable<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("ActionTable").field("actions", &names).finish()
    }
}
