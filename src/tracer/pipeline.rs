//! OTLP span export pipeline construction
//!
//! Builds the OpenTelemetry provider the tracer emits through: an OTLP/HTTP
//! span exporter bound to the collector endpoint and credential, behind a
//! batch processor running on the Tokio runtime. Batching, retry, and
//! delivery are entirely the SDK's concern; nothing here blocks span
//! creation.

use std::collections::HashMap;

use opentelemetry::KeyValue;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::trace::{BatchSpanProcessor, Config, TracerProvider};
use opentelemetry_sdk::{runtime, Resource};
use tracing::debug;

use crate::error::Result;

/// Header carrying the collector credential on both span export and feedback.
pub(crate) const API_KEY_HEADER: &str = "x-middle-ai-api-key";

/// Instrumentation scope name attached to every span.
pub(crate) const INSTRUMENTATION_NAME: &str = "MiddleAI";

/// Standard OTLP/HTTP trace ingestion path, appended to the collector base URL.
const TRACES_PATH: &str = "/v1/traces";

/// Build a provider exporting to `<endpoint>/v1/traces` with the resource
/// attribute `service.name` set to the application name.
///
/// Exporter construction failures propagate; misconfiguration should surface
/// at startup rather than silently dropping telemetry later.
pub(crate) fn build_provider(
    service_name: &str,
    endpoint: &str,
    api_key: Option<&str>,
) -> Result<TracerProvider> {
    let mut headers = HashMap::new();
    if let Some(key) = api_key {
        headers.insert(API_KEY_HEADER.to_string(), key.to_string());
    }

    let traces_endpoint = format!("{}{}", endpoint.trim_end_matches('/'), TRACES_PATH);
    debug!("Exporting spans to {}", traces_endpoint);

    let exporter = opentelemetry_otlp::new_exporter()
        .http()
        .with_endpoint(traces_endpoint)
        .with_headers(headers)
        .build_span_exporter()?;

    let resource = Resource::new(vec![KeyValue::new(
        "service.name",
        service_name.to_string(),
    )]);

    let processor = BatchSpanProcessor::builder(exporter, runtime::Tokio).build();

    Ok(TracerProvider::builder()
        .with_config(Config::default().with_resource(resource))
        .with_span_processor(processor)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_build_provider_with_api_key() {
        let provider = build_provider("test-app", "http://localhost:4318", Some("secret"));
        assert!(provider.is_ok());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_build_provider_without_api_key() {
        let provider = build_provider("test-app", "http://localhost:4318/", None);
        assert!(provider.is_ok());
    }
}
