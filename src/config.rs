//! Tracer configuration.
//!
//! Configuration is an explicit struct handed to [`crate::tracer::Tracer::new`] rather
//! than a hidden environment lookup inside the constructor. The environment-reading
//! convenience lives here in [`TracerConfig::from_env`] so the decision stays at the
//! call site and tests can construct configurations directly.

use std::env;

/// Environment variable naming the collector/API base URL.
pub const ENDPOINT_ENV: &str = "MIDDLE_AI_ENDPOINT";

/// Environment variable naming the API credential.
pub const API_KEY_ENV: &str = "MIDDLE_AI_API_KEY";

/// Connection settings for the Middle AI collector.
///
/// An absent (or empty) `endpoint` puts the tracer into inert mode: every
/// operation degrades to a no-op and no network calls are ever attempted, so
/// telemetry unavailability never breaks the host application.
#[derive(Debug, Clone, Default)]
pub struct TracerConfig {
    /// Collector base URL, e.g. `https://collector.example.com`.
    pub endpoint: Option<String>,
    /// Credential sent as the `x-middle-ai-api-key` header on every outbound call.
    pub api_key: Option<String>,
}

impl TracerConfig {
    /// Read the configuration from `MIDDLE_AI_ENDPOINT` and `MIDDLE_AI_API_KEY`.
    ///
    /// Unset and empty variables both map to `None`.
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var(ENDPOINT_ENV).ok().filter(|v| !v.is_empty()),
            api_key: env::var(API_KEY_ENV).ok().filter(|v| !v.is_empty()),
        }
    }
}
