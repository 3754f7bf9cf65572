//! HTTP server configuration.

use super::{EnvLookup, parse_or_default};

/// HTTP server bind settings.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl ServerConfig {
    /// Load server settings with defaults.
    pub fn from_lookup(env: &dyn EnvLookup) -> Self {
        Self {
            host: env.get("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or_default(env.get("PORT"), "PORT", 7712),
        }
    }

    /// Render the bind address for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
