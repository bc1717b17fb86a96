//! Telemetry SDK for LLM applications: emits OpenTelemetry spans describing
//! LLM calls and submits end-user feedback to a Middle AI collector.

pub mod config;
pub mod error;
pub mod tracer;

pub use error::{MiddleAiError, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::config::TracerConfig;
    pub use crate::error::{MiddleAiError, Result};
    pub use crate::tracer::{FeedbackType, LlmSpan, Tracer};
}
