//! Process health subsystem.
//!
//! # Data Flow
//! ```text
//! /health, /info handlers
//!     → process.rs (uptime, memory, platform, arch)
//!     → serialised into the response as-is
//! ```
//!
//! # Design Decisions
//! - Figures are sampled per request, never cached
//! - Uptime is measured from a clock started before the listener binds

pub mod process;

pub use process::{arch, memory_usage, platform, MemoryUsage, ProcessClock, SnapshotError};
