//! Lifecycle management for `serve` mode.
//!
//! # Data Flow
//! ```text
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Trigger → server stops accepting → in-flight invocations finish → exit
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
