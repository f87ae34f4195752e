//! JSON request body parsing.
//!
//! # Responsibilities
//! - Reject malformed JSON bodies with 400 before any handler runs
//! - Cap JSON bodies at `MAX_JSON_BODY_BYTES` (413 beyond that)
//! - Reject bodies that fail to arrive (aborted upload, I/O error) with 400
//! - Pass every other request through untouched
//!
//! # Design Decisions
//! - Only bodies declared as JSON (`application/json`, `*/*+json`) are inspected
//! - Empty bodies are accepted, whatever the content type
//! - The buffered body is handed on unchanged so handlers can still read it

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header, HeaderMap, StatusCode},
    middleware::Next,
    response::Response,
};

use http_body_util::LengthLimitError;
use std::error::Error as StdError;

use crate::http::error::error_response;

/// Largest JSON body accepted.
pub const MAX_JSON_BODY_BYTES: usize = 100 * 1024;

/// Whether the request declares a JSON body.
pub fn is_json(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    essence == "application/json" || essence.ends_with("+json")
}

/// Whether a body read failed because it hit the length limit.
fn exceeds_limit(err: &axum::Error) -> bool {
    let mut source: Option<&(dyn StdError + 'static)> = Some(err);
    while let Some(e) = source {
        if e.is::<LengthLimitError>() {
            return true;
        }
        source = e.source();
    }
    false
}

/// Middleware validating JSON request bodies.
pub async fn json_body_parser(request: Request, next: Next) -> Response {
    if !is_json(request.headers()) {
        return next.run(request).await;
    }

    let (parts, body) = request.into_parts();
    let bytes = match to_bytes(body, MAX_JSON_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(e) if exceeds_limit(&e) => {
            tracing::warn!(path = %parts.uri.path(), error = %e, "Request body too large");
            return error_response(
                StatusCode::PAYLOAD_TOO_LARGE,
                "Payload too large",
                format!("request body exceeds {} bytes", MAX_JSON_BODY_BYTES),
            );
        }
        Err(e) => {
            tracing::warn!(path = %parts.uri.path(), error = %e, "Failed to read request body");
            return error_response(StatusCode::BAD_REQUEST, "Invalid request body", e.to_string());
        }
    };

    if !bytes.is_empty() {
        if let Err(e) = serde_json::from_slice::<serde_json::Value>(&bytes) {
            tracing::warn!(path = %parts.uri.path(), error = %e, "Malformed JSON body");
            return error_response(StatusCode::BAD_REQUEST, "Invalid JSON body", e.to_string());
        }
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}
