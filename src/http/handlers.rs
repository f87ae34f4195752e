//! Route handlers.
//!
//! Handlers only read the shared, immutable `AppState` and sample process
//! figures at call time; none of them mutate anything.

use axum::{
    extract::{OriginalUri, State},
    http::StatusCode,
    Json,
};

use crate::config::iso_timestamp;
use crate::health;
use crate::http::error::HttpError;
use crate::http::payload::{
    DataResponse, HealthResponse, InfoResponse, NotFoundResponse, RootResponse,
    APPLICATION_NAME, APPLICATION_VERSION, DATA_ITEMS, WELCOME_MESSAGE,
};
use crate::http::server::AppState;

/// `GET /`
pub async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: WELCOME_MESSAGE,
        status: "running",
        timestamp: iso_timestamp(),
        build: state.build.as_ref().clone(),
    })
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        uptime: state.clock.uptime_secs(),
        timestamp: iso_timestamp(),
    })
}

/// `GET /info`
pub async fn info(State(state): State<AppState>) -> Result<Json<InfoResponse>, HttpError> {
    let memory = health::memory_usage()?;

    Ok(Json(InfoResponse {
        application: APPLICATION_NAME,
        version: APPLICATION_VERSION,
        build: state.build.as_ref().clone(),
        uptime: state.clock.uptime_secs(),
        memory,
        platform: health::platform(),
        arch: health::arch(),
    }))
}

/// `GET /api/data`
pub async fn data() -> Json<DataResponse> {
    Json(DataResponse {
        data: &DATA_ITEMS,
        timestamp: iso_timestamp(),
    })
}

/// Fallback for unknown paths and unsupported methods.
///
/// Echoes the path as the client sent it, before normalisation.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> (StatusCode, Json<NotFoundResponse>) {
    tracing::debug!(path = %uri.path(), "No route matched");
    (
        StatusCode::NOT_FOUND,
        Json(NotFoundResponse {
            error: "Route not found",
            path: uri.path().to_string(),
        }),
    )
}
