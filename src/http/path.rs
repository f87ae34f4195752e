//! Request path normalisation.
//!
//! # Responsibilities
//! - Match routes case-insensitively
//! - Accept a single trailing slash on any route (`/health/`)
//!
//! # Design Decisions
//! - Runs before routing and rewrites the URI to the canonical route path;
//!   the query string is kept
//! - Paths that match no route are left untouched, and the 404 body echoes
//!   the path the client actually sent (`OriginalUri`)

use axum::{
    extract::Request,
    http::{uri::PathAndQuery, Uri},
};

/// Paths served by the router.
pub const ROUTES: [&str; 4] = ["/", "/health", "/info", "/api/data"];

/// The route `path` resolves to, if any.
pub fn canonical_route(path: &str) -> Option<&'static str> {
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() && !rest.ends_with('/') => rest,
        _ => path,
    };
    ROUTES
        .into_iter()
        .find(|route| route.eq_ignore_ascii_case(trimmed))
}

/// Rewrite the request URI to its canonical route path.
pub async fn normalize_path(mut request: Request) -> Request {
    let Some(route) = canonical_route(request.uri().path()) else {
        return request;
    };
    if route == request.uri().path() {
        return request;
    }

    let rewritten = match request.uri().query() {
        Some(query) => format!("{}?{}", route, query),
        None => route.to_string(),
    };
    let Ok(path_and_query) = rewritten.parse::<PathAndQuery>() else {
        return request;
    };

    let mut parts = request.uri().clone().into_parts();
    parts.path_and_query = Some(path_and_query);
    if let Ok(uri) = Uri::from_parts(parts) {
        *request.uri_mut() = uri;
    }
    request
}
