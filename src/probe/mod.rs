//! Probing subsystem.
//!
//! # Data Flow
//! ```text
//! hook loop
//!     → Probe::probe(url)            (one GET, bounded by timeouts.rs)
//!     → ProbeResponse { status, body_preview } | ProbeError
//!     → status.rs decides healthy / unhealthy
//! ```
//!
//! # Design Decisions
//! - The loop only sees the `Probe` trait; `http.rs` is the production client
//! - Transport failures are values, never panics
//! - Only a short body preview is read; it is never evaluated

pub mod http;
pub mod status;

use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use url::Url;

pub use http::HttpProber;
pub use status::is_healthy_status;

/// Result of a probe that reached the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResponse {
    pub status: u16,
    pub body_preview: String,
}

/// A probe that did not produce a response.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProbeError {
    #[error("timed out after {}ms", .0.as_millis())]
    Timeout(Duration),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("reading response body failed: {0}")]
    Body(String),
}

/// One GET against the target.
pub trait Probe: Send + Sync {
    fn probe(&self, url: &Url) -> impl Future<Output = Result<ProbeResponse, ProbeError>> + Send;
}
