//! Shutdown coordination for the service.

use std::fmt;
use std::sync::Arc;
use tokio::sync::watch;

use crate::lifecycle::signals::Signal;

/// Why the service is stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownReason {
    /// An OS signal was received.
    Signal(Signal),
    /// Shutdown was requested in-process.
    Requested,
}

impl fmt::Display for ShutdownReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShutdownReason::Signal(signal) => write!(f, "{} received", signal),
            ShutdownReason::Requested => write!(f, "shutdown requested"),
        }
    }
}

/// Coordinator for shutdown.
///
/// The first trigger is latched: tasks that subscribe after it still see it.
#[derive(Clone)]
pub struct Shutdown {
    tx: Arc<watch::Sender<Option<ShutdownReason>>>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = watch::channel(None);
        Self { tx: Arc::new(tx) }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> ShutdownSignal {
        ShutdownSignal {
            rx: self.tx.subscribe(),
        }
    }

    /// Trigger the shutdown signal. Later triggers keep the first reason.
    pub fn trigger(&self, reason: ShutdownReason) {
        self.tx.send_if_modified(|current| {
            if current.is_some() {
                return false;
            }
            *current = Some(reason);
            true
        });
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving half of `Shutdown`.
pub struct ShutdownSignal {
    rx: watch::Receiver<Option<ShutdownReason>>,
}

impl ShutdownSignal {
    /// Wait until shutdown is triggered, returning immediately if it already was.
    pub async fn recv(&mut self) -> ShutdownReason {
        let reason = match self.rx.wait_for(Option::is_some).await {
            Ok(reason) => *reason,
            Err(_) => None,
        };
        match reason {
            Some(reason) => reason,
            // Every coordinator is gone, so no trigger can arrive any more.
            None => std::future::pending().await,
        }
    }
}
