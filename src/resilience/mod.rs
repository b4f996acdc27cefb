//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Probe against the test listener:
//!     → timeouts.rs (enforce per-probe deadline)
//!     → On failure: retries.rs (wait fixed delay, probe again until budget spent)
//! ```
//!
//! # Design Decisions
//! - Timeouts are non-negotiable; every probe has a deadline
//! - Retries are bounded; exhaustion is surfaced to the caller

pub mod retries;
pub mod timeouts;
