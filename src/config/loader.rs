//! Configuration loading from the process environment.

use crate::config::schema::{BuildInfo, ListenerConfig, ObservabilityConfig, ServiceConfig};
use crate::config::validation::{validate_address, validate_port, ValidationError};

/// Result of resolving the environment.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// Resolved configuration, defaults applied.
    pub config: ServiceConfig,
    /// Values that were present but rejected; their defaults are in effect.
    pub rejected: Vec<ValidationError>,
}

/// Load configuration from the process environment.
pub fn load_from_env() -> LoadedConfig {
    load_with(|name| std::env::var(name).ok())
}

/// Load configuration through an arbitrary variable lookup.
///
/// Every variable is optional. Empty values count as unset. Values that fail
/// validation are replaced by their default and returned in `rejected` so the
/// caller can report them once logging is up.
pub fn load_with<F>(lookup: F) -> LoadedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
    let mut rejected = Vec::new();

    let mut listener = ListenerConfig::default();
    if let Some(raw) = var("PORT") {
        match validate_port("PORT", &raw) {
            Ok(port) => listener.port = port,
            Err(e) => rejected.push(e),
        }
    }

    let mut build = BuildInfo::default();
    if let Some(v) = var("BUILD_NUMBER") {
        build.build_number = v;
    }
    if let Some(v) = var("GIT_COMMIT") {
        build.git_commit = v;
    }
    if let Some(v) = var("BUILD_DATE") {
        build.build_date = v;
    }
    if let Some(v) = var("NODE_ENV") {
        build.environment = v;
    }

    let mut observability = ObservabilityConfig {
        json_logs: var("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json")),
        metrics_address: None,
    };
    if let Some(raw) = var("METRICS_ADDRESS") {
        match validate_address("METRICS_ADDRESS", &raw) {
            Ok(addr) => observability.metrics_address = Some(addr),
            Err(e) => rejected.push(e),
        }
    }

    LoadedConfig {
        config: ServiceConfig {
            listener,
            build,
            observability,
        },
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> LoadedConfig {
        let env: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        load_with(|name| env.get(name).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        let LoadedConfig { config, rejected } = load(&[]);
        assert!(rejected.is_empty());
        assert_eq!(config.listener.port, 3000);
        assert_eq!(config.build.build_number, "dev");
        assert_eq!(config.build.git_commit, "unknown");
        assert_eq!(config.build.environment, "development");
        assert!(!config.observability.json_logs);
        assert!(config.observability.metrics_address.is_none());
    }

    #[test]
    fn test_reads_all_variables() {
        let config = load(&[
            ("PORT", "8080"),
            ("BUILD_NUMBER", "42"),
            ("GIT_COMMIT", "8b065bde1a2b3c4d"),
            ("BUILD_DATE", "2025-10-30T11:14:07Z"),
            ("NODE_ENV", "production"),
            ("LOG_FORMAT", "JSON"),
            ("METRICS_ADDRESS", "127.0.0.1:9090"),
        ])
        .config;
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.build.build_number, "42");
        assert_eq!(config.build.git_commit, "8b065bde1a2b3c4d");
        assert_eq!(config.build.build_date, "2025-10-30T11:14:07Z");
        assert_eq!(config.build.environment, "production");
        assert!(config.observability.json_logs);
        assert_eq!(
            config.observability.metrics_address.map(|a| a.port()),
            Some(9090)
        );
    }

    #[test]
    fn test_invalid_port_falls_back() {
        let loaded = load(&[("PORT", "not-a-port")]);
        assert_eq!(loaded.config.listener.port, 3000);
        assert_eq!(
            loaded.rejected,
            vec![ValidationError::InvalidPort {
                name: "PORT",
                value: "not-a-port".to_string(),
            }]
        );
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let LoadedConfig { config, rejected } = load(&[("BUILD_NUMBER", ""), ("PORT", "  ")]);
        assert!(rejected.is_empty());
        assert_eq!(config.build.build_number, "dev");
        assert_eq!(config.listener.port, 3000);
    }

    #[test]
    fn test_invalid_metrics_address_disables_export() {
        let loaded = load(&[("METRICS_ADDRESS", "nowhere")]);
        assert!(loaded.config.observability.metrics_address.is_none());
        assert_eq!(loaded.rejected.len(), 1);
    }
}
