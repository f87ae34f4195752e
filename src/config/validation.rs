//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation of raw environment values
//! - Validate value ranges (ports fit in u16, addresses parse)
//!
//! # Design Decisions
//! - Validation is a pure function over the raw string
//! - Callers decide whether a failure is fatal; the loader falls back to defaults

use std::net::SocketAddr;
use thiserror::Error;

/// A single configuration value that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{name}={value:?} is not a valid TCP port")]
    InvalidPort { name: &'static str, value: String },

    #[error("{name}={value:?} is not a valid socket address")]
    InvalidAddress { name: &'static str, value: String },
}

/// Parse a listen port.
pub fn validate_port(name: &'static str, raw: &str) -> Result<u16, ValidationError> {
    raw.trim()
        .parse::<u16>()
        .map_err(|_| ValidationError::InvalidPort {
            name,
            value: raw.to_string(),
        })
}

/// Parse a socket address such as `0.0.0.0:9090`.
pub fn validate_address(name: &'static str, raw: &str) -> Result<SocketAddr, ValidationError> {
    raw.trim()
        .parse::<SocketAddr>()
        .map_err(|_| ValidationError::InvalidAddress {
            name,
            value: raw.to_string(),
        })
}
