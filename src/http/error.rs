//! Handler fault mapping.
//!
//! Every failure raised while handling a request ends up here, whether it is
//! returned as an `Err` or escapes as a panic. Both produce the same 500 body
//! and are logged at error level.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::any::Any;
use thiserror::Error;

use crate::health::SnapshotError;

/// Error returned by route handlers.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}

/// JSON body for failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

/// Build a JSON error response.
pub fn error_response(status: StatusCode, error: &'static str, message: String) -> Response {
    (status, Json(ErrorBody { error, message })).into_response()
}

fn internal_error(message: String) -> Response {
    error_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error",
        message,
    )
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        tracing::error!(error = ?self, "Request handler failed");
        internal_error(self.to_string())
    }
}

/// Convert a handler panic into a 500 response.
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    // The default panic hook has already written the location and, with
    // RUST_BACKTRACE set, the stack trace to stderr.
    tracing::error!(panic = %message, "Request handler panicked");
    internal_error(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_handler_error_is_500_with_message() {
        let err = HttpError::from(SnapshotError::CurrentPid("unsupported platform"));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Internal server error");
        assert_eq!(
            body["message"],
            "cannot determine current process id: unsupported platform"
        );
    }

    #[tokio::test]
    async fn test_panic_payload_becomes_message() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["message"], "boom");

        let response = panic_response(Box::new(String::from("formatted boom")));
        assert_eq!(body_json(response).await["message"], "formatted boom");

        let response = panic_response(Box::new(7_u8));
        assert_eq!(body_json(response).await["message"], "unknown panic");
    }
}
