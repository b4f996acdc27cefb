//! Validation outcomes and errors.

use serde::Serialize;
use thiserror::Error;

use crate::probe::ProbeError;

/// Terminal success of an invocation.
///
/// Serializes as `{"status": "Succeeded", "code": 200}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status")]
pub enum ValidationOutcome {
    Succeeded { code: u16 },
}

impl ValidationOutcome {
    pub fn code(&self) -> u16 {
        match self {
            ValidationOutcome::Succeeded { code } => *code,
        }
    }
}

/// Why a single probe did not count as healthy.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProbeFailure {
    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),

    #[error(transparent)]
    Probe(#[from] ProbeError),
}

/// Errors surfaced to the deployment controller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HookError {
    /// Target variable absent or blank. No probe was issued.
    #[error("{var} not set")]
    MissingTarget { var: &'static str },

    /// Target variable present but unusable. No probe was issued.
    #[error("{var} is not a valid http(s) URL ({value:?}): {reason}")]
    InvalidTarget {
        var: &'static str,
        value: String,
        reason: String,
    },

    /// Every attempt failed.
    #[error("Test traffic validation failed: {last}")]
    Exhausted { attempts: u32, last: ProbeFailure },
}

impl HookError {
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            HookError::MissingTarget { .. } | HookError::InvalidTarget { .. }
        )
    }

    /// Error class reported alongside the message.
    pub fn error_type(&self) -> &'static str {
        if self.is_configuration() {
            "ConfigurationError"
        } else {
            "ValidationFailed"
        }
    }
}

/// Error object returned to the invoker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_message: String,
    pub error_type: String,
}

impl ErrorResponse {
    pub fn new(error_type: impl Into<String>, error_message: impl Into<String>) -> Self {
        Self {
            error_message: error_message.into(),
            error_type: error_type.into(),
        }
    }
}

impl From<&HookError> for ErrorResponse {
    fn from(err: &HookError) -> Self {
        Self::new(err.error_type(), err.to_string())
    }
}
