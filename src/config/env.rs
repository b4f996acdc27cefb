//! Execution environment lookup.
//!
//! The hook reads its target from the environment on every invocation, so
//! the lookup sits behind a trait that tests can replace with a map.

use std::collections::HashMap;
use std::sync::Arc;

/// Environment variable holding the URL to probe.
pub const TARGET_URL_VAR: &str = "TEST_URL";

/// Source of environment variables.
pub trait EnvSource: Send + Sync {
    fn var(&self, key: &str) -> Option<String>;
}

/// The process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl EnvSource for HashMap<String, String> {
    fn var(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

impl<T: EnvSource + ?Sized> EnvSource for Arc<T> {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }
}

/// Shared, type-erased environment used by the HTTP endpoint.
pub type SharedEnv = Arc<dyn EnvSource>;
