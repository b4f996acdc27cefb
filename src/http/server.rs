//! HTTP invocation endpoint.
//!
//! # Responsibilities
//! - Create Axum Router with the invocation and liveness handlers
//! - Wire up middleware (request ID, tracing)
//! - Bound each invocation by `server.request_timeout_secs`
//! - Serve until the shutdown coordinator fires

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::config::{ServerConfig, SharedEnv};
use crate::hook::TrafficValidationHook;
use crate::http::handlers::{healthz, invoke};
use crate::http::request::{propagate_request_id_layer, set_request_id_layer};
use crate::probe::HttpProber;

/// Path used by function-runtime emulators for synchronous invocations.
pub const RUNTIME_INVOKE_PATH: &str = "/2015-03-31/functions/function/invocations";

/// The hook as served over HTTP.
pub type ServedHook = TrafficValidationHook<HttpProber, SharedEnv>;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub hook: Arc<ServedHook>,
    /// Deadline for one invocation; a late validation answers as an error.
    pub request_timeout: Duration,
}

/// HTTP server exposing the hook.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    pub fn new(hook: ServedHook, config: &ServerConfig) -> Self {
        let state = AppState {
            hook: Arc::new(hook),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/invoke", post(invoke))
            .route(RUNTIME_INVOKE_PATH, post(invoke))
            .route("/healthz", get(healthz))
            .with_state(state)
            .layer(
                ServiceBuilder::new()
                    .layer(set_request_id_layer())
                    .layer(TraceLayer::new_for_http())
                    .layer(propagate_request_id_layer()),
            )
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Invocation endpoint listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("Invocation endpoint stopped");
        Ok(())
    }
}
