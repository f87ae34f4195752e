//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits so the resolved configuration can be logged
//! or embedded in responses verbatim.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::net::{Ipv4Addr, SocketAddr};

/// Port used when `PORT` is unset or unusable.
pub const DEFAULT_PORT: u16 = 3000;

/// Version of the toolchain that compiled this binary.
pub const RUNTIME_VERSION: &str = concat!("rustc ", env!("APP_RUSTC_VERSION"));

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (port).
    pub listener: ListenerConfig,

    /// Build metadata reported by `/` and `/info`.
    pub build: BuildInfo,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// TCP port, bound on all interfaces.
    pub port: u16,
}

impl ListenerConfig {
    /// Address the HTTP listener binds to.
    pub fn bind_address(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// Build and version metadata, resolved once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildInfo {
    /// CI build identifier (`BUILD_NUMBER`).
    pub build_number: String,

    /// Source commit hash (`GIT_COMMIT`).
    pub git_commit: String,

    /// ISO-8601 build timestamp (`BUILD_DATE`).
    pub build_date: String,

    /// Toolchain version of the running binary.
    pub runtime_version: String,

    /// Deployment environment name (`NODE_ENV`).
    pub environment: String,
}

impl BuildInfo {
    /// First seven characters of the commit hash, as shown in the startup banner.
    pub fn short_commit(&self) -> &str {
        match self.git_commit.char_indices().nth(7) {
            Some((idx, _)) => &self.git_commit[..idx],
            None => &self.git_commit,
        }
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            build_number: "dev".to_string(),
            git_commit: "unknown".to_string(),
            build_date: iso_timestamp(),
            runtime_version: RUNTIME_VERSION.to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Emit log lines as JSON instead of the human-readable format.
    pub json_logs: bool,

    /// Prometheus scrape endpoint; metrics export is off when unset.
    pub metrics_address: Option<SocketAddr>,
}

/// Current UTC time as ISO-8601 with millisecond precision.
pub fn iso_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_info_defaults() {
        let build = BuildInfo::default();
        assert_eq!(build.build_number, "dev");
        assert_eq!(build.git_commit, "unknown");
        assert_eq!(build.environment, "development");
        assert!(build.runtime_version.starts_with("rustc "));
        assert!(chrono::DateTime::parse_from_rfc3339(&build.build_date).is_ok());
    }

    #[test]
    fn test_build_info_serializes_camel_case() {
        let value = serde_json::to_value(BuildInfo::default()).unwrap();
        for key in ["buildNumber", "gitCommit", "buildDate", "runtimeVersion", "environment"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
    }

    #[test]
    fn test_short_commit() {
        let mut build = BuildInfo::default();
        build.git_commit = "8b065bde1a2b3c4d".to_string();
        assert_eq!(build.short_commit(), "8b065bd");

        build.git_commit = "abc".to_string();
        assert_eq!(build.short_commit(), "abc");
    }

    #[test]
    fn test_bind_address_is_all_interfaces() {
        let listener = ListenerConfig { port: 8080 };
        assert_eq!(listener.bind_address().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_iso_timestamp_format() {
        let ts = iso_timestamp();
        assert!(ts.ends_with('Z'));
        assert_eq!(ts.len(), "2026-01-01T00:00:00.000Z".len());
    }
}
