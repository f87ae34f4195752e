//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → path.rs (case and trailing-slash normalisation)
//!     → body.rs (reject malformed JSON bodies)
//!     → handlers.rs (/, /health, /info, /api/data, 404 fallback)
//!     → payload.rs (response bodies)
//!     → error.rs (500 for handler errors and panics)
//!     → Send to client
//! ```

pub mod body;
pub mod error;
pub mod handlers;
pub mod path;
pub mod payload;
pub mod server;

pub use error::HttpError;
pub use server::{build_router, AppState, HttpServer};
