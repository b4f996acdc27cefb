//! HTTP layer for `serve` mode.
//!
//! # Data Flow
//! ```text
//! POST /invoke (body = event JSON)
//!     → request.rs (x-request-id)
//!     → handlers.rs (parse event, run hook)
//!     → 200 outcome | 500 error object
//! ```

pub mod handlers;
pub mod request;
pub mod server;

pub use server::HttpServer;
