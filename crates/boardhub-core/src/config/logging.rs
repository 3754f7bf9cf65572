//! Logging configuration.

use super::EnvLookup;

/// Log level and output format.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// Output format: `pretty` or `json`.
    pub format: String,
}

impl LoggingConfig {
    /// Load logging settings with defaults.
    pub fn from_lookup(env: &dyn EnvLookup) -> Self {
        Self {
            level: env.get("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            format: env.get("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
        }
    }
}
