//! Invocation payload and context.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Payload sent by the deployment controller.
///
/// Opaque: nothing in it is required. Lifecycle identifiers are pulled out
/// for log correlation when present.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ValidationRequest(Value);

impl ValidationRequest {
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    pub fn payload(&self) -> &Value {
        &self.0
    }

    pub fn deployment_id(&self) -> Option<&str> {
        self.field("DeploymentId")
    }

    pub fn lifecycle_execution_id(&self) -> Option<&str> {
        self.field("LifecycleEventHookExecutionId")
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }
}

impl From<Value> for ValidationRequest {
    fn from(payload: Value) -> Self {
        Self(payload)
    }
}

/// Per-invocation metadata supplied by whatever runs the hook.
#[derive(Debug, Clone)]
pub struct InvocationContext {
    pub request_id: String,
}

impl InvocationContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
        }
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new(uuid::Uuid::new_v4().to_string())
    }
}
