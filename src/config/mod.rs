//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, invocation budget)
//!     → HookConfig (validated, immutable)
//!
//! Per invocation:
//!     env.rs reads TEST_URL from the execution environment
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults; the defaults are the hook's fixed contract
//! - The probe target is never part of the file: it is read at invocation time

pub mod env;
pub mod loader;
pub mod schema;
pub mod validation;

pub use env::{EnvSource, ProcessEnv, SharedEnv, TARGET_URL_VAR};
pub use schema::HookConfig;
pub use schema::InvocationConfig;
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::ProbeConfig;
pub use schema::ServerConfig;
