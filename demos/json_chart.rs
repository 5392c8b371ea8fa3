//! JSON Chart
//!
//! This example loads a chart from JSON and drives it with JSON events,
//! using a schema-less `serde_json::Map` as the context.
//!
//! Key concepts:
//! - Charts as configuration data
//! - Loosely-typed events with a `type` discriminator
//! - Patches with unknown keys extend the context
//!
//! Run with: RUST_LOG=tinychart=debug cargo run --example json_chart

use serde_json::{json, Map, Value};
use tinychart::core::{JsonEvent, StateChart};
use tinychart::machine::{ActionTable, Machine};
use tinychart::BuildError;
use tracing_subscriber::EnvFilter;

const CHART: &str = r#"{
    "initial": "idle",
    "context": { "uploads": 0 },
    "states": {
        "idle": {
            "on": { "UPLOAD": { "target": "uploading", "actions": ["remember"] } }
        },
        "uploading": {
            "on": {
                "DONE": { "target": "idle", "actions": ["count", "forget"] },
                "FAIL": { "target": "idle", "actions": ["recordError", "forget"] }
            }
        }
    }
}"#;

type Ctx = Map<String, Value>;

fn object(value: Value) -> Option<Ctx> {
    match value {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

fn actions() -> ActionTable<Ctx, JsonEvent> {
    ActionTable::new()
        .with("remember", |_ctx: &Ctx, event: &JsonEvent| {
            object(json!({ "file": event.get("file") }))
        })
        .with("count", |ctx: &Ctx, _event: &JsonEvent| {
            let uploads = ctx.get("uploads").and_then(Value::as_u64).unwrap_or(0);
            object(json!({ "uploads": uploads + 1 }))
        })
        .with("recordError", |_ctx: &Ctx, event: &JsonEvent| {
            object(json!({ "lastError": event.get("reason") }))
        })
        .with("forget", |_ctx: &Ctx, _event: &JsonEvent| {
            object(json!({ "file": null }))
        })
}

fn main() -> Result<(), BuildError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== JSON Chart Example ===\n");

    let chart: StateChart<Ctx> = StateChart::from_json(CHART)?;
    let mut machine = Machine::new(chart, actions());

    let events = [
        json!({ "type": "UPLOAD", "file": "a.txt" }),
        json!({ "type": "DONE" }),
        json!({ "type": "DONE" }),
        json!({ "type": "UPLOAD", "file": "b.txt" }),
        json!({ "type": "FAIL", "reason": "timeout" }),
    ];

    for value in events {
        let event: JsonEvent = serde_json::from_value(value).map_err(BuildError::from)?;
        let kind = event.kind.clone();
        machine.send(event);
        println!(
            "{:>8} -> {} {}",
            kind,
            machine.state(),
            Value::Object(machine.context().clone())
        );
    }

    println!("\nTransitions recorded: {}", machine.history().len());
    println!("\n=== Example Complete ===");
    Ok(())
}
