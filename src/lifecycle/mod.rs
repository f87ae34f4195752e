//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Register signals → Bind listener → Banner → Serve
//!
//! Signals (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! Shutdown (shutdown.rs):
//!     Trigger → Server stops accepting → Exit 0 (no draining)
//!
//! State (state.rs):
//!     Starting → Listening → ShuttingDown
//! ```

pub mod shutdown;
pub mod signals;
pub mod startup;
pub mod state;

use std::net::SocketAddr;
use thiserror::Error;

pub use shutdown::{Shutdown, ShutdownReason, ShutdownSignal};
pub use signals::{Signal, SignalListener};
pub use startup::{run, BoundService, Service};
pub use state::{Lifecycle, Phase};

/// Error type for lifecycle operations.
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to register signal handlers: {0}")]
    Signals(#[source] std::io::Error),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    #[error("invalid lifecycle transition from {from} to {to}")]
    InvalidTransition { from: Phase, to: Phase },
}
