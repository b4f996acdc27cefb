//! Traffic validation hook.
//!
//! Invoked by the deployment controller after test traffic has been shifted
//! to the green task set. Polls the test listener and either reports
//! `Succeeded` or fails, which makes the controller roll back.
//!
//! # Data Flow
//! ```text
//! ValidationRequest + InvocationContext
//!     → target.rs (TEST_URL from the environment, fail fast)
//!     → handler.rs (bounded probe loop)
//!     → ValidationOutcome | HookError (outcome.rs)
//! ```

pub mod event;
pub mod handler;
pub mod outcome;
pub mod target;

pub use event::{InvocationContext, ValidationRequest};
pub use handler::TrafficValidationHook;
pub use outcome::{ErrorResponse, HookError, ProbeFailure, ValidationOutcome};
