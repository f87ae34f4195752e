//! GrOMEtiS demo service.
//!
//! A small HTTP service reporting build metadata for a CI/CD pipeline.
//!
//! # Architecture Overview
//!
//! ```text
//!     environment ──▶ config ──▶ BuildInfo (immutable, Arc)
//!                                    │
//!     Client ──▶ lifecycle ──▶ http server ──▶ handlers ──▶ health (uptime, memory)
//!                   ▲
//!     SIGINT/SIGTERM┘ (shutdown trigger, exit 0)
//! ```
//!
//! # Endpoints
//! - `GET /`         welcome message and build info
//! - `GET /health`   liveness and uptime
//! - `GET /info`     build info, memory, platform
//! - `GET /api/data` fixed sample listing

use grometis_app::config;
use grometis_app::health::ProcessClock;
use grometis_app::lifecycle;
use grometis_app::observability::{logging, metrics};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let clock = ProcessClock::start();

    let loaded = config::load_from_env();
    logging::init_logging(loaded.config.observability.json_logs);

    for rejected in &loaded.rejected {
        tracing::warn!(error = %rejected, "Ignoring invalid setting, using default");
    }

    let config = loaded.config;
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.listener.port,
        environment = %config.build.environment,
        "grometis-app starting"
    );

    if let Some(addr) = config.observability.metrics_address {
        metrics::init_metrics(addr);
    }

    if let Err(e) = lifecycle::run(config, clock).await {
        tracing::error!(error = %e, "Fatal error, exiting");
        return Err(e.into());
    }

    Ok(())
}
