//! Core data types of a state machine.
//!
//! This module contains the plain data the engine works over:
//! - Chart definitions (states and transition rules)
//! - The `Context` trait and its shallow-merge contract
//! - The `Event` trait and a JSON event type
//! - The bounded transition log
//!
//! Nothing here dispatches events; see [`crate::machine`] for that.

mod chart;
mod context;
mod event;
mod history;

pub use chart::{StateChart, StateNode, TransitionRule};
pub use context::Context;
pub use event::{Event, JsonEvent};
pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
