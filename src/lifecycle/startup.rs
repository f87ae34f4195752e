//! Startup orchestration.
//!
//! # Responsibilities
//! - Register signal handlers
//! - Bind the listener and announce the service
//! - Serve until shutdown, then enter the terminal phase
//!
//! # Design Decisions
//! - Fail fast: a bind or signal registration failure is fatal
//! - The banner is only logged once the port is actually bound

use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::config::{BuildInfo, ServiceConfig};
use crate::health::ProcessClock;
use crate::http::{path::ROUTES, AppState, HttpServer};
use crate::lifecycle::shutdown::{Shutdown, ShutdownReason};
use crate::lifecycle::signals::SignalListener;
use crate::lifecycle::state::{Lifecycle, Phase};
use crate::lifecycle::LifecycleError;

/// A configured service that has not bound its port yet.
pub struct Service {
    config: ServiceConfig,
    clock: ProcessClock,
    lifecycle: Lifecycle,
}

impl Service {
    pub fn new(config: ServiceConfig, clock: ProcessClock) -> Self {
        Self {
            config,
            clock,
            lifecycle: Lifecycle::new(),
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Bind the configured port on all interfaces.
    pub async fn bind(self) -> Result<BoundService, LifecycleError> {
        let addr = self.config.listener.bind_address();
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| LifecycleError::Bind { addr, source })?;
        let local_addr = listener
            .local_addr()
            .map_err(|source| LifecycleError::Bind { addr, source })?;

        self.lifecycle.advance(Phase::Listening)?;
        log_banner(local_addr, &self.config.build);

        let server = HttpServer::new(AppState::new(self.config.build, self.clock));
        Ok(BoundService {
            listener,
            local_addr,
            server,
            lifecycle: self.lifecycle,
        })
    }
}

/// A service holding its bound listener.
pub struct BoundService {
    listener: TcpListener,
    local_addr: SocketAddr,
    server: HttpServer,
    lifecycle: Lifecycle,
}

impl BoundService {
    /// Address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.lifecycle.phase()
    }

    /// Serve until `shutdown` is triggered, including by a trigger that fired
    /// before this call.
    pub async fn serve(
        self,
        shutdown: &Shutdown,
    ) -> Result<Option<ShutdownReason>, LifecycleError> {
        let reason = self
            .server
            .run(self.listener, shutdown.subscribe())
            .await
            .map_err(LifecycleError::Serve)?;

        self.lifecycle.advance(Phase::ShuttingDown)?;
        match reason {
            Some(reason) => tracing::info!(reason = %reason, "Shutdown complete"),
            None => tracing::info!("Shutdown complete"),
        }
        Ok(reason)
    }
}

/// Run the service until a termination signal arrives.
pub async fn run(config: ServiceConfig, clock: ProcessClock) -> Result<(), LifecycleError> {
    let signals = SignalListener::install().map_err(LifecycleError::Signals)?;

    let bound = Service::new(config, clock).bind().await?;

    let shutdown = Shutdown::new();
    let _signal_task = signals.forward_to(shutdown.clone());

    bound.serve(&shutdown).await?;
    Ok(())
}

/// Announce the bound service.
pub fn log_banner(local_addr: SocketAddr, build: &BuildInfo) {
    let port = local_addr.port();
    tracing::info!(
        port,
        environment = %build.environment,
        build = %build.build_number,
        commit = %build.short_commit(),
        build_date = %build.build_date,
        "Server listening on port {}",
        port
    );
    for endpoint in ROUTES {
        tracing::info!("Endpoint available: http://localhost:{}{}", port, endpoint);
    }
}
