//! GrOMEtiS demo service library.

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::schema::{BuildInfo, ServiceConfig};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
