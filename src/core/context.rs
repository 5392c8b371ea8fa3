//! Context values threaded through transition actions.
//!
//! A context is the per-machine data record. Actions never replace it
//! wholesale: they return a *patch* describing the fields to overwrite,
//! and the machine folds each patch into the context in action order.

use serde_json::{Map, Value};
use std::fmt::Debug;

/// Data record carried by a machine and updated by actions.
///
/// `apply` performs a shallow merge: every field present in the patch
/// replaces the current value, every field absent from it is kept.
///
/// Typed contexts usually come from the [`context_struct!`](crate::context_struct)
/// macro. For fully dynamic data, `serde_json::Map<String, Value>`
/// implements this trait with object-spread semantics.
///
/// # Example
///
/// ```rust
/// use tinychart::core::Context;
///
/// #[derive(Clone, Debug, PartialEq)]
/// struct Counter {
///     count: u32,
///     label: String,
/// }
///
/// #[derive(Default)]
/// struct CounterPatch {
///     count: Option<u32>,
///     label: Option<String>,
/// }
///
/// impl Context for Counter {
///     type Patch = CounterPatch;
///
///     fn apply(&mut self, patch: CounterPatch) {
///         if let Some(count) = patch.count {
///             self.count = count;
///         }
///         if let Some(label) = patch.label {
///             self.label = label;
///         }
///     }
/// }
///
/// let mut ctx = Counter { count: 1, label: "a".into() };
/// ctx.apply(CounterPatch { count: Some(2), ..Default::default() });
/// assert_eq!(ctx, Counter { count: 2, label: "a".into() });
/// ```
pub trait Context: Clone + Debug {
    /// Partial update produced by an action.
    type Patch;

    /// Shallow-merge `patch` over `self`.
    fn apply(&mut self, patch: Self::Patch);
}

/// Object-spread merge: patch keys overwrite or extend the context.
///
/// Keys the context did not have before are inserted, so a JSON context
/// can grow new fields over its lifetime.
impl Context for Map<String, Value> {
    type Patch = Map<String, Value>;

    fn apply(&mut self, patch: Self::Patch) {
        for (key, value) in patch {
            self.insert(key, value);
        }
    }
}
