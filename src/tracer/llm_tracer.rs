//! The LLM-call tracer
//!
//! One [`Tracer`] per logical application. `start_trace` opens a span carrying
//! the model identifier, prompt, end-user id, and the flattened model
//! parameters; `end_trace` attaches the model output and hands the span to the
//! batching exporter; `send_feedback` posts an end-user feedback record to the
//! collector's HTTP API.
//!
//! A tracer constructed without a collector endpoint is **inert**: every
//! operation is a no-op and no network call is ever attempted, so telemetry
//! unavailability never breaks the host application.

use opentelemetry::trace::{Span as _, Tracer as _, TracerProvider as _};
use opentelemetry::KeyValue;
use opentelemetry_sdk::trace::{
    Span as SdkSpan, Tracer as SdkTracer, TracerProvider as SdkTracerProvider,
};
use reqwest::{Client, StatusCode};
use serde_json::Value as JsonValue;
use tracing::{debug, info, warn};

use super::attributes::{flatten_model_params, otel_value};
use super::feedback::{FeedbackRecord, FeedbackType};
use super::pipeline::{self, API_KEY_HEADER};
use crate::config::TracerConfig;
use crate::error::{MiddleAiError, Result};

/// Single-use span handle returned by [`Tracer::start_trace`].
///
/// The handle is consumed by [`Tracer::end_trace`], so a span cannot be ended
/// twice. Dropping an unended handle ends the span without an `llm_output`
/// attribute.
pub struct LlmSpan {
    inner: SdkSpan,
}

/// Emits one span per LLM call and submits end-user feedback.
///
/// Configuration is immutable after construction; a single instance can be
/// shared across tasks. Span handles themselves are single-owner.
pub struct Tracer {
    name: String,
    endpoint: Option<String>,
    api_key: Option<String>,
    provider: Option<SdkTracerProvider>,
    tracer: Option<SdkTracer>,
    client: Client,
}

impl Tracer {
    /// Create a tracer for the application `name`.
    ///
    /// With `config.endpoint` absent or empty the tracer is inert. Otherwise
    /// the OTLP export pipeline is built eagerly, with the resource attribute
    /// `service.name` set to `name` and the configured credential attached to
    /// every export request; pipeline construction failures propagate.
    ///
    /// The batch exporter spawns its delivery task on the ambient Tokio
    /// runtime, so a configured tracer must be constructed within one.
    ///
    /// # Arguments
    ///
    /// * `name` - Application identifier, attached to every span as `application_ref`
    /// * `config` - Collector endpoint and credential
    pub fn new(name: impl Into<String>, config: TracerConfig) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(MiddleAiError::ConfigError(
                "application name must not be empty".to_string(),
            ));
        }

        let endpoint = config
            .endpoint
            .filter(|e| !e.is_empty())
            .map(|e| e.trim_end_matches('/').to_string());
        let api_key = config.api_key.filter(|k| !k.is_empty());

        let (provider, tracer) = match endpoint.as_deref() {
            Some(endpoint) => {
                info!("Initializing span export pipeline for {}", endpoint);
                let provider = pipeline::build_provider(&name, endpoint, api_key.as_deref())?;
                let tracer = provider.tracer(pipeline::INSTRUMENTATION_NAME);
                (Some(provider), Some(tracer))
            }
            None => {
                debug!("No collector endpoint configured; tracer {} is inert", name);
                (None, None)
            }
        };

        Ok(Self {
            name,
            endpoint,
            api_key,
            provider,
            tracer,
            client: Client::new(),
        })
    }

    /// Create a tracer emitting through a caller-supplied provider.
    ///
    /// Useful for custom export pipelines and tests. No endpoint is
    /// configured, so `send_feedback` stays disabled.
    pub fn with_provider(name: impl Into<String>, provider: SdkTracerProvider) -> Self {
        let tracer = provider.tracer(pipeline::INSTRUMENTATION_NAME);
        Self {
            name: name.into(),
            endpoint: None,
            api_key: None,
            provider: Some(provider),
            tracer: Some(tracer),
            client: Client::new(),
        }
    }

    /// Application name attached to every span as `application_ref`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the tracer has an export pipeline (false in inert mode).
    pub fn is_enabled(&self) -> bool {
        self.tracer.is_some()
    }

    /// Open a span describing one LLM call.
    ///
    /// Returns `None` when the tracer is inert. The span stays open (and
    /// unexported) until it is passed to [`Tracer::end_trace`]. No network
    /// call blocks this method.
    ///
    /// # Arguments
    ///
    /// * `name` - Span name
    /// * `model` - Identifier of the LLM model used
    /// * `model_params` - Arbitrarily nested parameter tree, flattened under `model_params.`
    /// * `prompt` - The end-user prompt for this call
    /// * `user` - End-user identifier
    /// * `thread_id` - Conversation thread identifier (empty allowed)
    /// * `initial_prompt` - First prompt of the conversation (empty allowed)
    #[allow(clippy::too_many_arguments)]
    pub fn start_trace(
        &self,
        name: impl Into<String>,
        model: impl Into<String>,
        model_params: &JsonValue,
        prompt: impl Into<String>,
        user: impl Into<String>,
        thread_id: impl Into<String>,
        initial_prompt: impl Into<String>,
    ) -> Option<LlmSpan> {
        let tracer = self.tracer.as_ref()?;

        let mut attributes = vec![
            KeyValue::new("llm_model", model.into()),
            KeyValue::new("enduser_id", user.into()),
            KeyValue::new("user_prompt", prompt.into()),
            KeyValue::new("application_ref", self.name.clone()),
            KeyValue::new("thread_id", thread_id.into()),
            KeyValue::new("initial_prompt", initial_prompt.into()),
        ];
        for (key, value) in flatten_model_params(model_params) {
            attributes.push(KeyValue::new(key, otel_value(&value)));
        }

        let name = name.into();
        debug!("Starting trace {} with {} attributes", name, attributes.len());

        let span = tracer.span_builder(name).with_attributes(attributes).start(tracer);
        Some(LlmSpan { inner: span })
    }

    /// Attach the model output to the span and end it.
    ///
    /// An absent handle is a safe no-op, mirroring the inert-tracer case.
    /// Ending hands the span to the export pipeline for asynchronous
    /// delivery.
    pub fn end_trace(&self, span: Option<LlmSpan>, output: impl Into<String>) {
        if let Some(mut span) = span {
            span.inner.set_attribute(KeyValue::new("llm_output", output.into()));
            span.inner.end();
        }
    }

    /// Submit end-user feedback for a conversation thread.
    ///
    /// Returns `true` iff the collector answered with HTTP 200 exactly. An
    /// inert tracer returns `false` without any network call; transport
    /// failures are logged and mapped to `false` as well.
    ///
    /// # Arguments
    ///
    /// * `thread_id` - Conversation thread the feedback refers to
    /// * `user` - End-user identifier
    /// * `feedback_type` - Kind of feedback being submitted
    /// * `feedback_value` - Value whose semantics depend on `feedback_type`
    pub async fn send_feedback(
        &self,
        thread_id: impl Into<String>,
        user: impl Into<String>,
        feedback_type: FeedbackType,
        feedback_value: impl Into<String>,
    ) -> bool {
        let Some(endpoint) = self.endpoint.as_deref() else {
            debug!("No collector endpoint configured; dropping feedback");
            return false;
        };

        let record = FeedbackRecord {
            application_ref: self.name.clone(),
            thread_id: thread_id.into(),
            enduser_id: user.into(),
            feedback_type,
            feedback_value: feedback_value.into(),
        };

        match self.post_feedback(endpoint, &record).await {
            Ok(StatusCode::OK) => true,
            Ok(status) => {
                warn!("Feedback submission rejected with status {}", status);
                false
            }
            Err(err) => {
                warn!("Feedback submission failed: {}", err);
                false
            }
        }
    }

    async fn post_feedback(&self, endpoint: &str, record: &FeedbackRecord) -> Result<StatusCode> {
        let mut request = self.client.post(format!("{}/feedback", endpoint)).json(record);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        Ok(response.status())
    }

    /// Drain spans queued in the batch processor.
    ///
    /// No-op on an inert tracer.
    pub fn force_flush(&self) -> Result<()> {
        if let Some(provider) = &self.provider {
            for result in provider.force_flush() {
                result?;
            }
        }
        Ok(())
    }

    /// Flush remaining spans and shut the export pipeline down.
    ///
    /// No-op on an inert tracer. Spans started after shutdown are silently
    /// dropped by the SDK.
    pub fn shutdown(&self) -> Result<()> {
        if let Some(provider) = &self.provider {
            provider.shutdown()?;
        }
        Ok(())
    }
}
