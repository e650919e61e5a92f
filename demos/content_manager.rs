//! Content Manager
//!
//! This example walks one concern through its whole fetch lifecycle.
//!
//! Key concepts:
//! - Generated action types and creators
//! - Default merge transitions driven through `reduce`
//! - A stubbed transport folded into phase actions by `fetch_action`
//!
//! Run with: cargo run --example content_manager

use phaser::builder::ManagerBuilder;
use phaser::core::StoreState;
use phaser::effects::{fetch_action, FetchEnv, FetchError, FetchRequest, TracingLogger};
use serde_json::{json, Value};
use std::sync::Arc;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing_subscriber::EnvFilter;

// Transport stand-in: serves page 1, fails on anything else
#[derive(Clone)]
struct StubTransport;

impl FetchEnv for StubTransport {
    fn fetch(&self, request: &FetchRequest) -> Result<Value, FetchError> {
        match request.url.as_str() {
            "/content?page=1" => Ok(json!({ "page1": ["intro", "setup"] })),
            _ => Err(FetchError::Status {
                status: 503,
                body: None,
            }),
        }
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .init();

    println!("=== Content Manager Example ===\n");

    let content = ManagerBuilder::new()
        .name("CONTENT")
        .build()
        .expect("CONTENT is a valid manager name");

    println!("Action types:");
    for (phase, identifier) in content.action_types().iter() {
        println!("  {:<10} -> {}", phase, identifier);
    }

    let state = StoreState::new();
    let state = content.reduce(&state, &content.initial([json!({})]));
    let state = content.reduce(&state, &content.in_progress(Vec::<Value>::new()));

    let action = fetch_action(&content, FetchRequest::new("/content?page=1"))
        .run(&StubTransport)
        .await
        .expect("fetch_action always yields an action");
    let state = content.reduce(&state, &action);
    println!("\nAfter page 1: {}", serde_json::to_string(&state).unwrap_or_default());

    let request = FetchRequest::new("/content?page=2")
        .name("Content")
        .logger(Arc::new(TracingLogger));
    let action = fetch_action(&content, request)
        .run(&StubTransport)
        .await
        .expect("fetch_action always yields an action");
    let state = content.reduce(&state, &action);
    println!("After page 2: {}", serde_json::to_string(&state).unwrap_or_default());

    println!("\n=== Example Complete ===");
}
