//! Application configuration schemas and the environment loader.
//!
//! The configuration surface is entirely environment-driven: indexed
//! entries per board (`BOARD_ROUTER_i`, `REDIS_HOST_i`, ...) plus global
//! settings for the server, session, auth gate, and logging. Every
//! loader takes an injectable `key -> Option<String>` lookup so tests
//! never mutate process environment.

pub mod auth;
pub mod boards;
pub mod logging;
pub mod server;
pub mod session;

use self::auth::GoogleAuthConfig;
use self::logging::LoggingConfig;
use self::server::ServerConfig;
use self::session::SessionConfig;

use crate::error::AppError;
use crate::types::BoardDescriptor;

/// A `key -> Option<String>` environment lookup.
///
/// Production passes `std::env::var`, tests pass a map.
pub trait EnvLookup {
    /// Look up one environment key.
    fn get(&self, key: &str) -> Option<String>;
}

impl<F> EnvLookup for F
where
    F: Fn(&str) -> Option<String>,
{
    fn get(&self, key: &str) -> Option<String> {
        self(key)
    }
}

/// Root application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Ordered board descriptors (unique mount paths).
    pub boards: Vec<BoardDescriptor>,
    /// Identity provider settings and the domain allow-list.
    pub auth: GoogleAuthConfig,
    /// Session cookie and store settings.
    pub session: SessionConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load the full configuration from process environment.
    ///
    /// Fails only when the identity provider credentials are missing —
    /// everything else falls closed to documented defaults.
    pub fn load() -> Result<Self, AppError> {
        Self::from_lookup(&|key: &str| std::env::var(key).ok())
    }

    /// Load the full configuration from an injected lookup.
    pub fn from_lookup(env: &dyn EnvLookup) -> Result<Self, AppError> {
        let server = ServerConfig::from_lookup(env);
        Ok(Self {
            boards: boards::load_board_descriptors(env),
            auth: GoogleAuthConfig::from_lookup(env, server.port)?,
            session: SessionConfig::from_lookup(env),
            logging: LoggingConfig::from_lookup(env),
            server,
        })
    }
}

/// Parse a numeric env value, falling closed to `default` on anything
/// malformed rather than aborting startup.
pub(crate) fn parse_or_default<T: std::str::FromStr + Copy>(
    raw: Option<String>,
    key: &str,
    default: T,
) -> T {
    match raw {
        Some(s) => s.parse().unwrap_or_else(|_| {
            tracing::warn!(key, value = %s, "Malformed numeric config value, using default");
            default
        }),
        None => default,
    }
}
