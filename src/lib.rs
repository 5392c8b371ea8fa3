//! Tinychart: a minimal table-driven state machine
//!
//! A machine is built from a declarative chart (initial state, initial
//! context, and per-state transition rules) and a table of named
//! actions. Sending an event moves the machine to the rule's target and
//! runs the rule's actions in order. Each action returns an optional
//! partial update that is shallow-merged into the context.
//!
//! # Core Concepts
//!
//! - **Chart**: States keyed by name, each mapping event types to rules
//! - **Actions**: Named functions `(context, event) -> Option<patch>`
//! - **Context**: Caller-defined data updated by action patches
//! - **Lenient dispatch**: Unhandled events and missing actions are no-ops
//!
//! # Example
//!
//! ```rust
//! use tinychart::context_struct;
//! use tinychart::core::{JsonEvent, StateChart, StateNode, TransitionRule};
//! use tinychart::machine::{ActionTable, Machine};
//!
//! context_struct! {
//!     pub struct Overlay {
//!         pub messages: Vec<String>,
//!     }
//!     patch: OverlayPatch
//! }
//!
//! let chart = StateChart::new("hidden", Overlay { messages: vec![] })
//!     .state(
//!         "hidden",
//!         StateNode::new().on("ERROR", TransitionRule::new("shown").action("setMessages")),
//!     )
//!     .state(
//!         "shown",
//!         StateNode::new().on("DISMISS", TransitionRule::new("hidden").action("clear")),
//!     );
//!
//! let actions = ActionTable::<Overlay, JsonEvent>::new()
//!     .with("setMessages", |_ctx: &Overlay, event: &JsonEvent| {
//!         let message = event.get("message")?.as_str()?.to_string();
//!         Some(OverlayPatch { messages: Some(vec![message]) })
//!     })
//!     .with("clear", |_ctx: &Overlay, _event: &JsonEvent| {
//!         Some(OverlayPatch { messages: Some(vec![]) })
//!     });
//!
//! let mut machine = Machine::new(chart, actions);
//! machine.send(JsonEvent::new("ERROR").with("message", "boom".into()));
//!
//! assert_eq!(machine.state(), "shown");
//! assert_eq!(machine.context().messages, vec!["boom".to_string()]);
//!
//! machine.send(JsonEvent::new("ERROR"));
//! assert_eq!(machine.state(), "shown");
//! ```

pub mod builder;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateChartBuilder};
pub use crate::core::{Context, Event, JsonEvent, StateChart, StateNode, TransitionRule};
pub use crate::machine::{ActionTable, Machine};
