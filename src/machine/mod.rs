//! Event dispatch.
//!
//! A [`Machine`] pairs a [`StateChart`](crate::core::StateChart) with an
//! [`ActionTable`]. Sending an event looks up the current state's rule
//! for the event type, moves to the rule's target, then runs the named
//! actions in order, folding their patches into the context.
//!
//! Dispatch never fails. Unhandled events, unknown states and
//! unregistered actions are skipped silently; enable `trace` level
//! logging for the `tinychart` target to see them.

mod actions;
mod engine;

pub use actions::{ActionFn, ActionTable};
pub use engine::Machine;
