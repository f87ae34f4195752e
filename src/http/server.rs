//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router with all handlers and the 404 fallback
//! - Normalise request paths before routing
//! - Wire up middleware (request ID, tracing, panic recovery, metrics, JSON body parser)
//! - Serve on an already-bound listener until shutdown is signalled

use axum::{middleware, routing::get, Router};
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::config::BuildInfo;
use crate::health::ProcessClock;
use crate::http::{body, error, handlers, path};
use crate::lifecycle::{ShutdownReason, ShutdownSignal};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub build: Arc<BuildInfo>,
    pub clock: ProcessClock,
}

impl AppState {
    pub fn new(build: BuildInfo, clock: ProcessClock) -> Self {
        Self {
            build: Arc::new(build),
            clock,
        }
    }
}

/// HTTP server for the service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server serving the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            router: build_router(state),
        }
    }

    /// Run the server until shutdown is triggered.
    ///
    /// Returning drops the accept loop immediately; in-flight requests are
    /// not drained.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: ShutdownSignal,
    ) -> Result<Option<ShutdownReason>, std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::debug!(address = %addr, "HTTP server starting");

        tokio::select! {
            res = axum::serve(listener, self.router).into_future() => {
                res?;
                tracing::warn!("HTTP server exited without a shutdown signal");
                Ok(None)
            }
            reason = shutdown.recv() => {
                tracing::info!("HTTP server stopped");
                Ok(Some(reason))
            }
        }
    }
}

/// Build the Axum router with all middleware layers.
///
/// Path normalisation wraps the routed service, so it rewrites the URI
/// before any route is matched.
pub fn build_router(state: AppState) -> Router {
    let routes = Router::new()
        .route("/", get(handlers::root).fallback(handlers::not_found))
        .route("/health", get(handlers::health).fallback(handlers::not_found))
        .route("/info", get(handlers::info).fallback(handlers::not_found))
        .route("/api/data", get(handlers::data).fallback(handlers::not_found))
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(middleware::from_fn(body::json_body_parser))
        .layer(middleware::from_fn(metrics::track_requests));

    Router::new()
        .fallback_service(routes)
        .layer(middleware::map_request(path::normalize_path))
        .layer(CatchPanicLayer::custom(error::panic_response))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
