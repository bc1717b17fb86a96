//! LLM-call tracing and feedback submission
//!
//! The tracer opens one OpenTelemetry span per LLM call, carrying the model
//! identifier, the end-user prompt, and the caller's model parameters flattened
//! into dotted attribute keys. Finished spans are handed to a batching OTLP
//! exporter for asynchronous delivery to the collector; end-user feedback goes
//! out over a separate HTTP POST, independent of any span lifecycle.
//!
//! # Components
//!
//! - **Tracer**: one per logical application, holds the export pipeline and
//!   the collector configuration
//! - **LlmSpan**: single-use span handle returned by `start_trace` and consumed
//!   by `end_trace`
//! - **FeedbackType / FeedbackRecord**: the wire types behind `send_feedback`
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use middle_ai::config::TracerConfig;
//! use middle_ai::tracer::Tracer;
//! use serde_json::json;
//!
//! # async fn example() -> middle_ai::Result<()> {
//! let tracer = Tracer::new("my-app", TracerConfig::from_env())?;
//!
//! let params = json!({"sampling": {"temperature": 0.7}});
//! let span = tracer.start_trace(
//!     "chat-completion",
//!     "llama3.2",
//!     &params,
//!     "What is Rust?",
//!     "user-42",
//!     "thread-1",
//!     "",
//! );
//!
//! // ... call the model ...
//!
//! tracer.end_trace(span, "Rust is a systems programming language.");
//! # Ok(())
//! # }
//! ```

pub mod attributes;
pub mod feedback;
pub mod llm_tracer;
mod pipeline;

// Re-export main types
pub use attributes::{flatten_model_params, MODEL_PARAMS_PREFIX};
pub use feedback::{FeedbackRecord, FeedbackType};
pub use llm_tracer::{LlmSpan, Tracer};
