//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the hook.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the validation hook.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct HookConfig {
    /// Probe loop settings (attempts, spacing, per-request timeout).
    pub probe: ProbeConfig,

    /// HTTP invocation endpoint settings (`serve` mode).
    pub server: ServerConfig,

    /// Platform invocation limits, used for budget checks only.
    pub invocation: InvocationConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Probe loop configuration.
///
/// The defaults are the fixed contract of the hook: 12 attempts spaced
/// 5 seconds apart, each bounded by a 2 second timeout.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Maximum number of probes per invocation.
    pub attempts: u32,

    /// Pause between consecutive probes in milliseconds.
    pub delay_ms: u64,

    /// Per-probe timeout in milliseconds.
    pub timeout_ms: u64,

    /// Maximum number of response body bytes read per probe.
    pub body_preview_bytes: usize,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            attempts: 12,
            delay_ms: 5_000,
            timeout_ms: 2_000,
            body_preview_bytes: 200,
        }
    }
}

/// HTTP invocation endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Upper bound on a single invocation request in seconds.
    pub request_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 120,
        }
    }
}

/// Limits imposed by the platform that invokes the hook.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct InvocationConfig {
    /// Platform invocation timeout in seconds, if known.
    pub timeout_secs: Option<u64>,
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Human-readable or JSON log lines.
    pub log_format: LogFormat,

    /// Enable the Prometheus endpoint in `serve` mode.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_probe_defaults_match_contract() {
        let probe = ProbeConfig::default();
        assert_eq!(probe.attempts, 12);
        assert_eq!(probe.delay_ms, 5_000);
        assert_eq!(probe.timeout_ms, 2_000);
        assert_eq!(probe.body_preview_bytes, 200);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: HookConfig = toml::from_str(
            r#"
            [probe]
            attempts = 3

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.probe.attempts, 3);
        assert_eq!(config.probe.delay_ms, 5_000);
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.server.bind_address, "0.0.0.0:8080");
        assert!(config.invocation.timeout_secs.is_none());
    }
}
