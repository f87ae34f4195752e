//! Shared utilities for integration tests.

use std::net::{Ipv4Addr, SocketAddr, TcpListener as StdTcpListener};
use std::time::Duration;
use tokio::task::JoinHandle;

use grometis_app::config::{BuildInfo, ListenerConfig, ServiceConfig};
use grometis_app::health::ProcessClock;
use grometis_app::lifecycle::{LifecycleError, Service, Shutdown, ShutdownReason};

/// A service running on a local ephemeral port.
#[allow(dead_code)]
pub struct TestService {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<Option<ShutdownReason>, LifecycleError>>,
}

#[allow(dead_code)]
impl TestService {
    /// URL for `path` on the running service.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Build info with fixed values for deterministic assertions.
#[allow(dead_code)]
pub fn fixed_build() -> BuildInfo {
    BuildInfo {
        build_number: "128".to_string(),
        git_commit: "0123456789abcdef".to_string(),
        build_date: "2026-01-15T08:30:00.000Z".to_string(),
        runtime_version: "rustc 1.80.0".to_string(),
        environment: "ci".to_string(),
    }
}

/// Bind and serve the application on an ephemeral port.
#[allow(dead_code)]
pub async fn start_service(build: BuildInfo) -> TestService {
    let config = ServiceConfig {
        listener: ListenerConfig { port: 0 },
        build,
        ..ServiceConfig::default()
    };

    let bound = Service::new(config, ProcessClock::start())
        .bind()
        .await
        .expect("bind ephemeral port");
    let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, bound.local_addr().port()));

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.clone();
    let handle = tokio::spawn(async move { bound.serve(&server_shutdown).await });

    TestService {
        addr,
        shutdown,
        handle,
    }
}

/// A client that never reuses connections between tests.
#[allow(dead_code)]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .no_proxy()
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap()
}

/// Reserve a free local port and release it.
#[allow(dead_code)]
pub fn free_port() -> u16 {
    let listener = StdTcpListener::bind((Ipv4Addr::LOCALHOST, 0)).unwrap();
    listener.local_addr().unwrap().port()
}
