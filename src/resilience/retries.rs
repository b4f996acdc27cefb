//! Retry logic.
//!
//! # Responsibilities
//! - Bound the number of probes per invocation
//! - Space probes with a constant delay
//! - Compute the worst-case duration of a full retry run
//!
//! # Design Decisions
//! - Fixed spacing, no backoff or jitter: the target is a single test
//!   listener polled by one caller
//! - No delay after the final attempt
//! - Attempt count is non-zero by construction

use std::num::NonZeroU32;
use std::time::Duration;

use crate::config::ProbeConfig;

/// Fixed-spacing retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    attempts: NonZeroU32,
    delay: Duration,
}

impl RetryPolicy {
    pub fn new(attempts: NonZeroU32, delay: Duration) -> Self {
        Self { attempts, delay }
    }

    /// Build from probe configuration. A zero attempt count is rejected by
    /// validation; should one slip through it is raised to one attempt.
    pub fn from_config(config: &ProbeConfig) -> Self {
        Self {
            attempts: NonZeroU32::new(config.attempts).unwrap_or(NonZeroU32::MIN),
            delay: Duration::from_millis(config.delay_ms),
        }
    }

    pub fn attempts(&self) -> u32 {
        self.attempts.get()
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Pause to take after `attempt` (1-based), or `None` when it was the last.
    pub fn delay_after(&self, attempt: u32) -> Option<Duration> {
        if attempt < self.attempts.get() {
            Some(self.delay)
        } else {
            None
        }
    }

    /// Upper bound of a full run: `attempts × (delay + per_attempt)`.
    pub fn worst_case(&self, per_attempt: Duration) -> Duration {
        (self.delay + per_attempt).saturating_mul(self.attempts.get())
    }
}
