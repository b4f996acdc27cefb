//! Traffic validation loop.
//!
//! # State Transitions
//! ```text
//! Idle → Probing(1)
//! Probing(n) → Succeeded            status in [200, 400)
//! Probing(n) → Probing(n+1)         failure, attempts remain (after delay)
//! Probing(n) → Failed               failure, budget exhausted
//! ```

use std::time::Instant;
use tokio::time;

use crate::config::{EnvSource, ProbeConfig, ProcessEnv};
use crate::hook::event::{InvocationContext, ValidationRequest};
use crate::hook::outcome::{HookError, ProbeFailure, ValidationOutcome};
use crate::hook::target::resolve_target;
use crate::observability::metrics;
use crate::probe::{is_healthy_status, HttpProber, Probe};
use crate::resilience::retries::RetryPolicy;

/// Validates test traffic against the green task set.
///
/// Holds no mutable state; one value can serve concurrent invocations.
pub struct TrafficValidationHook<P, E = ProcessEnv> {
    prober: P,
    env: E,
    policy: RetryPolicy,
}

impl TrafficValidationHook<HttpProber, ProcessEnv> {
    /// Production hook: HTTP probes, target read from the process environment.
    pub fn from_config(config: &ProbeConfig) -> Result<Self, reqwest::Error> {
        Self::http(config, ProcessEnv)
    }
}

impl<E: EnvSource> TrafficValidationHook<HttpProber, E> {
    /// HTTP probes with the target read from `env`.
    pub fn http(config: &ProbeConfig, env: E) -> Result<Self, reqwest::Error> {
        Ok(Self {
            prober: HttpProber::new(config)?,
            env,
            policy: RetryPolicy::from_config(config),
        })
    }
}

impl<P: Probe, E: EnvSource> TrafficValidationHook<P, E> {
    pub fn new(prober: P, env: E, policy: RetryPolicy) -> Self {
        Self {
            prober,
            env,
            policy,
        }
    }

    /// Retry schedule this hook runs with.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn prober(&self) -> &P {
        &self.prober
    }

    /// Run one validation.
    ///
    /// Returns as soon as a probe is healthy. Probe errors are absorbed and
    /// retried; only a configuration error or an exhausted budget is returned.
    pub async fn validate(
        &self,
        event: &ValidationRequest,
        ctx: &InvocationContext,
    ) -> Result<ValidationOutcome, HookError> {
        let started = Instant::now();

        let target = match resolve_target(&self.env) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!(request_id = %ctx.request_id, error = %e, "Cannot start validation");
                metrics::record_validation("misconfigured", started);
                return Err(e);
            }
        };

        tracing::info!(
            request_id = %ctx.request_id,
            deployment_id = event.deployment_id().unwrap_or("-"),
            lifecycle_execution_id = event.lifecycle_execution_id().unwrap_or("-"),
            target = %target,
            attempts = self.policy.attempts(),
            delay = ?self.policy.delay(),
            "Validating test traffic"
        );

        let mut attempt = 1;
        loop {
            let failure = match self.prober.probe(&target).await {
                Ok(response) if is_healthy_status(response.status) => {
                    tracing::info!(
                        request_id = %ctx.request_id,
                        attempt,
                        status = response.status,
                        "Test traffic healthy"
                    );
                    tracing::debug!(request_id = %ctx.request_id, body = %response.body_preview, "Probe body");
                    metrics::record_probe("healthy");
                    metrics::record_validation("succeeded", started);
                    return Ok(ValidationOutcome::Succeeded {
                        code: response.status,
                    });
                }
                Ok(response) => {
                    tracing::debug!(request_id = %ctx.request_id, body = %response.body_preview, "Probe body");
                    metrics::record_probe("unhealthy");
                    ProbeFailure::UnexpectedStatus(response.status)
                }
                Err(e) => {
                    metrics::record_probe("error");
                    ProbeFailure::Probe(e)
                }
            };

            tracing::warn!(
                request_id = %ctx.request_id,
                attempt,
                attempts = self.policy.attempts(),
                error = %failure,
                "Probe failed"
            );

            match self.policy.delay_after(attempt) {
                Some(delay) => {
                    time::sleep(delay).await;
                    attempt += 1;
                }
                None => {
                    let err = HookError::Exhausted {
                        attempts: attempt,
                        last: failure,
                    };
                    tracing::error!(request_id = %ctx.request_id, error = %err, "Validation budget exhausted");
                    metrics::record_validation("failed", started);
                    return Err(err);
                }
            }
        }
    }
}
