//! Span emission demonstration
//!
//! This example opens a trace span for a simulated LLM call, attaches the
//! model output, and flushes the export pipeline. With `MIDDLE_AI_ENDPOINT`
//! unset the tracer runs inert and nothing leaves the process, which makes
//! this safe to run without a collector.
//!
//! # Running the example
//!
//! ```bash
//! MIDDLE_AI_ENDPOINT=http://localhost:4318 cargo run --example tracer_demo
//! ```

use anyhow::Result;
use dotenv::dotenv;
use middle_ai::prelude::*;
use serde_json::json;
use uuid::Uuid;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    println!("{}", "=".repeat(80));
    println!("LLM Trace Emission Demonstration");
    println!("{}", "=".repeat(80));
    println!();

    let config = TracerConfig::from_env();
    let tracer = Tracer::new("tracer-demo", config)?;

    if !tracer.is_enabled() {
        println!("MIDDLE_AI_ENDPOINT is not set; the tracer is inert and nothing is exported.");
    }

    let thread_id = Uuid::new_v4().to_string();
    let prompt = "Explain what Rust is in one sentence.";

    let params = json!({
        "sampling": { "temperature": 0.7, "top_p": 0.9 },
        "max_tokens": 256,
    });

    println!("Starting trace for thread {}", thread_id);
    let span = tracer.start_trace(
        "chat-completion",
        "qwen2.5:7b",
        &params,
        prompt,
        "demo-user",
        thread_id.as_str(),
        prompt,
    );

    // Stand-in for the actual model call.
    let output = "Rust is a systems programming language focused on safety and speed.";

    tracer.end_trace(span, output);
    println!("Trace ended; output attached.");

    tracer.shutdown()?;
    println!("Export pipeline flushed and shut down.");

    Ok(())
}
