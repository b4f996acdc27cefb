//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (attempts > 0, timeouts > 0, addresses parse, log level known)
//! - Compare the worst-case probe budget with the platform invocation timeout
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: HookConfig → Result<(), Vec<ValidationError>>
//! - The invocation budget is advisory: a warning, never a rejection

use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

use crate::config::schema::HookConfig;
use crate::resilience::retries::RetryPolicy;

/// Largest body preview a probe may read.
pub const MAX_BODY_PREVIEW_BYTES: usize = 64 * 1024;

/// A single semantic problem with a configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("probe.attempts must be at least 1")]
    ZeroAttempts,

    #[error("probe.timeout_ms must be greater than 0")]
    ZeroProbeTimeout,

    #[error("probe.body_preview_bytes must be greater than 0")]
    ZeroBodyPreview,

    #[error("probe.body_preview_bytes must be at most {max}, got {value}")]
    BodyPreviewTooLarge { value: usize, max: usize },

    #[error("observability.log_level {0:?} is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("server.request_timeout_secs must be greater than 0")]
    ZeroRequestTimeout,

    #[error("{field} is not a valid socket address: {value}")]
    InvalidAddress { field: &'static str, value: String },
}

/// Validate a configuration, collecting every violation.
pub fn validate_config(config: &HookConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.probe.attempts == 0 {
        errors.push(ValidationError::ZeroAttempts);
    }
    if config.probe.timeout_ms == 0 {
        errors.push(ValidationError::ZeroProbeTimeout);
    }
    if config.probe.body_preview_bytes == 0 {
        errors.push(ValidationError::ZeroBodyPreview);
    } else if config.probe.body_preview_bytes > MAX_BODY_PREVIEW_BYTES {
        errors.push(ValidationError::BodyPreviewTooLarge {
            value: config.probe.body_preview_bytes,
            max: MAX_BODY_PREVIEW_BYTES,
        });
    }
    if config.observability.log_level.parse::<tracing::Level>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }
    if config.server.request_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }
    if config.server.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "server.bind_address",
            value: config.server.bind_address.clone(),
        });
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// The platform may kill the hook before the probe loop can finish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetWarning {
    pub worst_case: Duration,
    pub invocation_timeout: Duration,
}

impl std::fmt::Display for BudgetWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "worst-case validation time {}s does not fit the {}s invocation timeout",
            self.worst_case.as_secs_f64(),
            self.invocation_timeout.as_secs_f64()
        )
    }
}

/// Check that a configured invocation timeout exceeds
/// `attempts × (delay + timeout)`.
pub fn check_invocation_budget(config: &HookConfig) -> Option<BudgetWarning> {
    let invocation_timeout = Duration::from_secs(config.invocation.timeout_secs?);
    let worst_case = RetryPolicy::from_config(&config.probe)
        .worst_case(Duration::from_millis(config.probe.timeout_ms));

    if worst_case >= invocation_timeout {
        Some(BudgetWarning {
            worst_case,
            invocation_timeout,
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&HookConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_every_error() {
        let mut config = HookConfig::default();
        config.probe.attempts = 0;
        config.probe.timeout_ms = 0;
        config.server.bind_address = "not-an-address".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ValidationError::ZeroAttempts));
        assert!(errors.contains(&ValidationError::ZeroProbeTimeout));
        assert!(errors
            .iter()
            .any(|e| e.to_string().contains("server.bind_address")));
    }

    #[test]
    fn test_body_preview_upper_bound() {
        let mut config = HookConfig::default();
        config.probe.body_preview_bytes = MAX_BODY_PREVIEW_BYTES;
        assert!(validate_config(&config).is_ok());

        config.probe.body_preview_bytes = usize::MAX / 2;
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::BodyPreviewTooLarge {
                value: usize::MAX / 2,
                max: MAX_BODY_PREVIEW_BYTES,
            }]
        );
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let mut config = HookConfig::default();
        config.observability.log_level = "verbose".into();
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::InvalidLogLevel("verbose".into())]
        );

        for level in ["trace", "DEBUG", "info", "warn", "error"] {
            config.observability.log_level = level.into();
            assert!(validate_config(&config).is_ok(), "{level}");
        }
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = HookConfig::default();
        config.observability.metrics_address = "bogus".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_budget_warning_for_short_invocation_timeout() {
        let mut config = HookConfig::default();
        config.invocation.timeout_secs = Some(60);

        let warning = check_invocation_budget(&config).unwrap();
        assert_eq!(warning.worst_case, Duration::from_secs(84));
        assert!(warning.to_string().contains("84s"));
    }

    #[test]
    fn test_no_budget_warning_when_timeout_fits_or_unknown() {
        let mut config = HookConfig::default();
        assert!(check_invocation_budget(&config).is_none());

        config.invocation.timeout_secs = Some(90);
        assert!(check_invocation_budget(&config).is_none());
    }
}
