//! Blue/green deployment traffic validation hook.

pub mod cli;
pub mod config;
pub mod hook;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod probe;
pub mod resilience;

pub use config::schema::HookConfig;
pub use hook::{HookError, TrafficValidationHook, ValidationOutcome};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
