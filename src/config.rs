//! # Runtime Configuration Module
//!
//! Environment variable based configuration for the `routecheck` binary.
//! Command-line flags take precedence over everything loaded here.
//!
//! ## Environment Variables
//!
//! ### `ROUTECHECK_LOG_LEVEL`
//!
//! Level used when `RUST_LOG` is not set: `trace`, `debug`, `info`, `warn`
//! or `error`. Default: `warn`.
//!
//! ### `ROUTECHECK_LOG_FORMAT`
//!
//! `pretty` (default) or `json`. Logs always go to stderr so that a JSON
//! report on stdout stays machine readable.
//!
//! ### `ROUTECHECK_DENY_WARNINGS`
//!
//! When `1`/`true`/`yes`, warnings fail the run like errors do.
//!
//! ## Usage
//!
//! ```rust
//! use routecheck::config::RuntimeConfig;
//!
//! let config = RuntimeConfig::from_env();
//! println!("log level: {}", config.log_level);
//! ```

use crate::logging::LogFormat;
use std::env;

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Fallback log level when `RUST_LOG` is unset
    pub log_level: String,
    pub log_format: LogFormat,
    /// Treat warnings as failures for the exit status
    pub deny_warnings: bool,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        RuntimeConfig {
            log_level: "warn".to_string(),
            log_format: LogFormat::Pretty,
            deny_warnings: false,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = RuntimeConfig::default();
        RuntimeConfig {
            log_level: lookup("ROUTECHECK_LOG_LEVEL")
                .map(|v| v.trim().to_lowercase())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.log_level),
            log_format: lookup("ROUTECHECK_LOG_FORMAT")
                .map(|v| LogFormat::parse(&v))
                .unwrap_or(defaults.log_format),
            deny_warnings: lookup("ROUTECHECK_DENY_WARNINGS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.deny_warnings),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
