//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters and latency histograms)
//!
//! Consumers:
//!     → stdout (human-readable or JSON lines)
//!     → optional Prometheus scrape endpoint
//! ```
//!
//! # Design Decisions
//! - Request ID (x-request-id) is attached to every traced request
//! - Metrics export is opt-in through METRICS_ADDRESS

pub mod logging;
pub mod metrics;
