use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tokio::time;

use crate::hook::{ErrorResponse, InvocationContext, ValidationRequest};
use crate::http::request::request_id;
use crate::http::server::AppState;

/// Marks a response whose body is an error object rather than a result.
pub const FUNCTION_ERROR_HEADER: &str = "x-amz-function-error";

/// `errorType` of an invocation cut off by `server.request_timeout_secs`.
pub const INVOCATION_TIMEOUT_ERROR: &str = "InvocationTimeout";

/// `POST /invoke`: run one validation with the request body as the event.
pub async fn invoke(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
    let ctx = request_id(&headers)
        .map(InvocationContext::new)
        .unwrap_or_default();

    let event = match parse_event(&body) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!(request_id = %ctx.request_id, error = %e, "Rejected invocation payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("InvalidRequestPayload", e.to_string())),
            )
                .into_response();
        }
    };

    match time::timeout(state.request_timeout, state.hook.validate(&event, &ctx)).await {
        Ok(Ok(outcome)) => (StatusCode::OK, Json(outcome)).into_response(),
        Ok(Err(e)) => function_error(ErrorResponse::from(&e)),
        Err(_) => {
            tracing::warn!(
                request_id = %ctx.request_id,
                timeout = ?state.request_timeout,
                "Invocation timed out before validation completed"
            );
            function_error(ErrorResponse::new(
                INVOCATION_TIMEOUT_ERROR,
                format!(
                    "Invocation timed out after {}s",
                    state.request_timeout.as_secs()
                ),
            ))
        }
    }
}

fn function_error(body: ErrorResponse) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(FUNCTION_ERROR_HEADER, "Unhandled")],
        Json(body),
    )
        .into_response()
}

/// `GET /healthz`: liveness of the endpoint itself, not of the target.
pub async fn healthz() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

/// An empty body is a `null` event.
fn parse_event(body: &[u8]) -> Result<ValidationRequest, serde_json::Error> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ValidationRequest::default());
    }
    serde_json::from_slice::<Value>(body).map(ValidationRequest::from)
}
