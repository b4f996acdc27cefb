//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! hook loop, HTTP endpoint
//!     → logging.rs (structured log events, stderr)
//!     → metrics.rs (counters, histogram)
//!
//! Consumers:
//!     → Platform log collection
//!     → Metrics endpoint (Prometheus scrape, serve mode only)
//! ```

pub mod logging;
pub mod metrics;
