//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (PORT, BUILD_NUMBER, GIT_COMMIT, BUILD_DATE, NODE_ENV, ...)
//!     → loader.rs (read, apply defaults)
//!     → validation.rs (semantic checks, fallback on failure)
//!     → ServiceConfig (immutable)
//!     → BuildInfo shared via Arc with the HTTP layer
//! ```
//!
//! # Design Decisions
//! - Read exactly once at startup; nothing re-reads the environment afterwards
//! - All fields have defaults, so an empty environment is a valid configuration
//! - Lookup is injectable so tests never touch the real environment

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_from_env, load_with, LoadedConfig};
pub use schema::{iso_timestamp, BuildInfo, ListenerConfig, ObservabilityConfig, ServiceConfig};
pub use validation::ValidationError;
