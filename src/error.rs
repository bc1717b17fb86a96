//! Error types and result aliases for the Middle AI SDK.
//!
//! This module defines the core error type [`MiddleAiError`] and the [`Result`] type alias
//! used throughout the library. All public APIs that can fail return `Result<T>` for
//! consistent error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MiddleAiError {
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    #[error("Telemetry pipeline error: {0}")]
    PipelineError(#[from] opentelemetry::trace::TraceError),

    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MiddleAiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = MiddleAiError::ConfigError("application name must not be empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: application name must not be empty"
        );
    }

    #[test]
    fn test_pipeline_error_conversion() {
        let trace_err = opentelemetry::trace::TraceError::from("exporter unavailable");
        let err: MiddleAiError = trace_err.into();

        match err {
            MiddleAiError::PipelineError(_) => {}
            _ => panic!("Expected PipelineError"),
        }
    }

    #[test]
    fn test_serialization_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let err: MiddleAiError = json_err.into();

        match err {
            MiddleAiError::SerializationError(_) => {}
            _ => panic!("Expected SerializationError"),
        }
    }

    #[test]
    fn test_error_debug() {
        let err = MiddleAiError::ConfigError("test".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("ConfigError"));
    }

    #[test]
    fn test_result_type() {
        let ok_result: Result<i32> = Ok(42);
        assert!(ok_result.is_ok());

        let err_result: Result<i32> = Err(MiddleAiError::ConfigError("test".to_string()));
        assert!(err_result.is_err());
    }
}
