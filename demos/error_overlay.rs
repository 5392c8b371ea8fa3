//! Error Overlay
//!
//! This example drives a dev-server style error overlay: build and
//! runtime errors open the overlay, further errors of the same kind are
//! appended, and DISMISS closes it.
//!
//! Key concepts:
//! - Typed context declared with `context_struct!`
//! - Actions returning partial updates
//! - Side-effect-only actions (show/hide) returning `None`
//! - Unhandled events are silently ignored
//!
//! Run with: RUST_LOG=tinychart=trace cargo run --example error_overlay

use tinychart::context_struct;
use tinychart::core::{Event, StateChart, StateNode, TransitionRule};
use tinychart::machine::{ActionTable, Machine};
use tracing_subscriber::EnvFilter;

context_struct! {
    pub struct Overlay {
        pub level: String,
        pub messages: Vec<String>,
    }
    patch: OverlayPatch
}

#[derive(Debug)]
enum OverlayEvent {
    BuildError { level: String, messages: Vec<String> },
    RuntimeError { level: String, messages: Vec<String> },
    Dismiss,
}

impl Event for OverlayEvent {
    fn event_type(&self) -> &str {
        match self {
            Self::BuildError { .. } => "BUILD_ERROR",
            Self::RuntimeError { .. } => "RUNTIME_ERROR",
            Self::Dismiss => "DISMISS",
        }
    }
}

impl OverlayEvent {
    fn payload(&self) -> Option<(&str, &[String])> {
        match self {
            Self::BuildError { level, messages } | Self::RuntimeError { level, messages } => {
                Some((level.as_str(), messages.as_slice()))
            }
            Self::Dismiss => None,
        }
    }
}

fn chart() -> StateChart<Overlay> {
    let open = |target: &str| TransitionRule::new(target).actions(["setMessages", "showOverlay"]);
    let append = |target: &str| TransitionRule::new(target).actions(["appendMessages", "showOverlay"]);
    let dismiss = TransitionRule::new("hidden").actions(["dismissMessages", "hideOverlay"]);

    StateChart::new(
        "hidden",
        Overlay {
            level: "error".to_string(),
            messages: Vec::new(),
        },
    )
    .state(
        "hidden",
        StateNode::new()
            .on("BUILD_ERROR", open("displayBuildError"))
            .on("RUNTIME_ERROR", open("displayRuntimeError")),
    )
    .state(
        "displayBuildError",
        StateNode::new()
            .on("DISMISS", dismiss.clone())
            .on("BUILD_ERROR", append("displayBuildError")),
    )
    .state(
        "displayRuntimeError",
        StateNode::new()
            .on("DISMISS", dismiss)
            .on("RUNTIME_ERROR", append("displayRuntimeError"))
            .on("BUILD_ERROR", open("displayBuildError")),
    )
}

fn actions() -> ActionTable<Overlay, OverlayEvent> {
    ActionTable::new()
        .with("setMessages", |_ctx: &Overlay, event: &OverlayEvent| {
            let (level, messages) = event.payload()?;
            Some(OverlayPatch {
                level: Some(level.to_string()),
                messages: Some(messages.to_vec()),
            })
        })
        .with("appendMessages", |ctx: &Overlay, event: &OverlayEvent| {
            let (level, messages) = event.payload()?;
            Some(OverlayPatch {
                level: Some(level.to_string()),
                messages: Some([ctx.messages.as_slice(), messages].concat()),
            })
        })
        .with("dismissMessages", |_ctx: &Overlay, _event: &OverlayEvent| {
            Some(OverlayPatch {
                level: Some("error".to_string()),
                messages: Some(Vec::new()),
            })
        })
        .with("showOverlay", |ctx: &Overlay, _event: &OverlayEvent| {
            println!("  [overlay] {} ({} messages)", ctx.level, ctx.messages.len());
            None
        })
        .with("hideOverlay", |_ctx: &Overlay, _event: &OverlayEvent| {
            println!("  [overlay] hidden");
            None
        })
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Error Overlay Example ===\n");

    let mut machine = Machine::new(chart(), actions());
    println!("Initial state: {}", machine.state());

    let events = vec![
        OverlayEvent::BuildError {
            level: "warning".to_string(),
            messages: vec!["warning-1".to_string()],
        },
        OverlayEvent::BuildError {
            level: "error".to_string(),
            messages: vec!["error-1".to_string()],
        },
        OverlayEvent::RuntimeError {
            level: "error".to_string(),
            messages: vec!["undefined is not a function".to_string()],
        },
        OverlayEvent::Dismiss,
    ];

    for event in events {
        println!("\nSending {}", event.event_type());
        machine.send(event);
        println!("  state:   {}", machine.state());
        println!("  context: {:?}", machine.context());
    }

    println!("\nPath: {}", machine.history().get_path().join(" -> "));
    println!("\n=== Example Complete ===");
}
