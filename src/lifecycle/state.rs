//! Service lifecycle state machine.
//!
//! # States
//! - Starting: configuration resolved, listener not yet bound
//! - Listening: accepting and serving requests
//! - ShuttingDown: terminal, no further requests are served
//!
//! # State Transitions
//! ```text
//! Starting  → Listening:    listener bound
//! Listening → ShuttingDown: termination signal or shutdown request
//! ```
//!
//! Any other transition is rejected.

use std::fmt;
use tokio::sync::watch;

use crate::lifecycle::LifecycleError;

/// Lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Starting,
    Listening,
    ShuttingDown,
}

impl Phase {
    fn can_advance_to(self, next: Phase) -> bool {
        matches!(
            (self, next),
            (Phase::Starting, Phase::Listening) | (Phase::Listening, Phase::ShuttingDown)
        )
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Starting => write!(f, "starting"),
            Phase::Listening => write!(f, "listening"),
            Phase::ShuttingDown => write!(f, "shutting-down"),
        }
    }
}

/// Lifecycle state.
pub struct Lifecycle {
    tx: watch::Sender<Phase>,
}

impl Lifecycle {
    /// A lifecycle in the `Starting` phase.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(Phase::Starting);
        Self { tx }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        *self.tx.borrow()
    }

    /// Move to `next`, rejecting transitions the state machine does not allow.
    pub fn advance(&self, next: Phase) -> Result<(), LifecycleError> {
        let from = self.phase();
        if !from.can_advance_to(next) {
            return Err(LifecycleError::InvalidTransition { from, to: next });
        }
        self.tx.send_replace(next);
        tracing::debug!(from = %from, to = %next, "Lifecycle phase changed");
        Ok(())
    }
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}
