//! Session cookie and store configuration.

use tracing::warn;

use super::{EnvLookup, parse_or_default};

/// Name of the signed session cookie.
pub const SESSION_COOKIE: &str = "boardhub_session";

/// Which session store backs the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStoreProvider {
    /// Process-local store, lost on restart.
    Memory,
    /// Redis-backed store shared across replicas.
    Redis { url: String },
}

/// Session secret, TTL, and store selection.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Secret the session cookie is signed with.
    pub secret: String,
    /// Session TTL in hours.
    pub ttl_hours: u64,
    /// Store provider backing session records.
    pub store: SessionStoreProvider,
}

impl SessionConfig {
    /// Load session settings; everything falls closed to defaults.
    pub fn from_lookup(env: &dyn EnvLookup) -> Self {
        // Cookie-key derivation needs at least 32 bytes of secret, so a
        // too-short value fails closed to the default like any other
        // malformed setting.
        let secret = match env.get("SESSION_SECRET") {
            Some(s) if s.len() >= 32 => s,
            Some(_) => {
                warn!("SESSION_SECRET shorter than 32 bytes, using development default");
                default_secret()
            }
            None => {
                warn!("SESSION_SECRET not set, using development default");
                default_secret()
            }
        };

        let store = match env.get("SESSION_STORE").as_deref() {
            Some("redis") => SessionStoreProvider::Redis {
                url: env
                    .get("SESSION_REDIS_URL")
                    .unwrap_or_else(|| "redis://localhost:6379/0".to_string()),
            },
            _ => SessionStoreProvider::Memory,
        };

        Self {
            secret,
            ttl_hours: parse_or_default(env.get("SESSION_TTL_HOURS"), "SESSION_TTL_HOURS", 24),
            store,
        }
    }
}

fn default_secret() -> String {
    // Must be at least 64 bytes so cookie key derivation succeeds.
    "boardhub-development-secret-change-this-before-deploying-anywhere-real".to_string()
}
