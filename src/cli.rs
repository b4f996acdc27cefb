//! One-shot invocation and `check-config` helpers for the binary.
//!
//! # Responsibilities
//! - Read the event from a file, stdin (`-`), or fall back to `{}`
//! - Render the invocation result as the JSON object printed on stdout
//! - Build the worst-case budget report

use serde::Serialize;
use serde_json::{json, Value};
use std::io::Read;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::config::validation::check_invocation_budget;
use crate::config::HookConfig;
use crate::hook::{ErrorResponse, HookError, ValidationOutcome, ValidationRequest};
use crate::resilience::retries::RetryPolicy;

/// Event argument meaning "read from stdin".
pub const STDIN_ARG: &str = "-";

#[derive(Debug, Error)]
pub enum EventError {
    #[error("IO error reading event from {source_name}: {source}")]
    Io {
        source_name: String,
        source: std::io::Error,
    },

    #[error("event is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Resolve the `--event` argument into a request.
///
/// No argument yields `{}`. A blank file or stdin yields a `null` event.
pub fn read_event<R: Read>(
    arg: Option<&str>,
    mut stdin: R,
) -> Result<ValidationRequest, EventError> {
    let raw = match arg {
        None => return Ok(ValidationRequest::new(json!({}))),
        Some(STDIN_ARG) => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).map_err(|source| EventError::Io {
                source_name: "stdin".to_string(),
                source,
            })?;
            buf
        }
        Some(path) => std::fs::read_to_string(PathBuf::from(path)).map_err(|source| {
            EventError::Io {
                source_name: path.to_string(),
                source,
            }
        })?,
    };

    if raw.trim().is_empty() {
        return Ok(ValidationRequest::default());
    }
    Ok(serde_json::from_str(&raw)?)
}

/// The object printed on stdout for an invocation result.
pub fn result_json(result: &Result<ValidationOutcome, HookError>) -> Value {
    match result {
        Ok(outcome) => json!(outcome),
        Err(e) => json!(ErrorResponse::from(e)),
    }
}

/// Output of `check-config`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetReport {
    pub attempts: u32,
    pub delay_ms: u64,
    pub timeout_ms: u64,
    pub worst_case_secs: f64,
    pub invocation_timeout_secs: Option<u64>,
    pub fits_invocation_timeout: bool,
}

impl BudgetReport {
    pub fn from_config(config: &HookConfig) -> Self {
        let policy = RetryPolicy::from_config(&config.probe);
        let worst_case = policy.worst_case(Duration::from_millis(config.probe.timeout_ms));

        Self {
            attempts: policy.attempts(),
            delay_ms: config.probe.delay_ms,
            timeout_ms: config.probe.timeout_ms,
            worst_case_secs: worst_case.as_secs_f64(),
            invocation_timeout_secs: config.invocation.timeout_secs,
            fits_invocation_timeout: check_invocation_budget(config).is_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hook::ProbeFailure;
    use std::io::{empty, Write};

    #[test]
    fn test_no_event_argument_is_empty_object() {
        let event = read_event(None, empty()).unwrap();
        assert_eq!(event.payload(), &json!({}));
    }

    #[test]
    fn test_event_from_stdin() {
        let stdin = br#"{"DeploymentId":"d-STDIN"}"#.as_slice();
        let event = read_event(Some("-"), stdin).unwrap();
        assert_eq!(event.deployment_id(), Some("d-STDIN"));
    }

    #[test]
    fn test_blank_stdin_is_null_event() {
        let event = read_event(Some("-"), b"  \n".as_slice()).unwrap();
        assert_eq!(event.payload(), &Value::Null);
    }

    #[test]
    fn test_event_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"LifecycleEventHookExecutionId":"e-9"}}"#).unwrap();

        let path = file.path().to_str().unwrap();
        let event = read_event(Some(path), empty()).unwrap();
        assert_eq!(event.lifecycle_execution_id(), Some("e-9"));
    }

    #[test]
    fn test_missing_file_and_bad_json_are_errors() {
        assert!(matches!(
            read_event(Some("/nonexistent/event.json"), empty()).unwrap_err(),
            EventError::Io { .. }
        ));
        assert!(matches!(
            read_event(Some("-"), b"{oops".as_slice()).unwrap_err(),
            EventError::Parse(_)
        ));
    }

    #[test]
    fn test_result_json_shapes() {
        assert_eq!(
            result_json(&Ok(ValidationOutcome::Succeeded { code: 200 })),
            json!({"status": "Succeeded", "code": 200})
        );
        assert_eq!(
            result_json(&Err(HookError::Exhausted {
                attempts: 12,
                last: ProbeFailure::UnexpectedStatus(503),
            })),
            json!({
                "errorMessage": "Test traffic validation failed: Unexpected status: 503",
                "errorType": "ValidationFailed",
            })
        );
    }

    #[test]
    fn test_budget_report_flags_short_invocation_timeout() {
        let mut config = HookConfig::default();
        let report = BudgetReport::from_config(&config);
        assert_eq!(report.attempts, 12);
        assert_eq!(report.worst_case_secs, 84.0);
        assert!(report.fits_invocation_timeout);

        config.invocation.timeout_secs = Some(60);
        let report = BudgetReport::from_config(&config);
        assert_eq!(report.invocation_timeout_secs, Some(60));
        assert!(!report.fits_invocation_timeout);
    }
}
