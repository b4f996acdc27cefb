//! Timeout enforcement.
//!
//! # Responsibilities
//! - Wrap a probe with a hard deadline
//! - Cancel the in-flight request cleanly on timeout
//!
//! # Design Decisions
//! - Uses Tokio's timeout facilities
//! - Timeout errors are distinct from other probe errors

use std::future::Future;
use std::time::Duration;
use tokio::time;

use crate::probe::ProbeError;

/// Run `fut`, failing with [`ProbeError::Timeout`] once `limit` elapses.
pub async fn within<F, T>(limit: Duration, fut: F) -> Result<T, ProbeError>
where
    F: Future<Output = Result<T, ProbeError>>,
{
    match time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => Err(ProbeError::Timeout(limit)),
    }
}
