//! Redis key scanning.

use async_trait::async_trait;
use redis::Client;
use redis::aio::MultiplexedConnection;
use tracing::info;

use boardhub_core::error::{AppError, ErrorKind};
use boardhub_core::result::AppResult;
use boardhub_core::types::RedisConnectionParams;

/// The narrow capability discovery depends on: enumerate all keys under
/// a pattern. Closing is handled by dropping the implementation.
#[async_trait]
pub trait KeyScan: Send + Sync {
    /// Return every key matching `pattern`.
    async fn scan(&self, pattern: &str) -> AppResult<Vec<String>>;
}

/// Redis-backed key scanner, one short-lived connection per scan cycle.
pub struct RedisKeyScanner {
    conn: MultiplexedConnection,
}

impl RedisKeyScanner {
    /// Open a connection to the backend described by `params`.
    pub async fn connect(params: &RedisConnectionParams) -> AppResult<Self> {
        let url = params.url();
        info!(url = %mask_redis_url(&url), "Connecting to queue backend");

        let client = Client::open(url.as_str()).map_err(|e| {
            AppError::with_source(ErrorKind::Discovery, "Failed to create Redis client", e)
        })?;

        let conn = client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Discovery, "Failed to connect to Redis", e)
            })?;

        Ok(Self { conn })
    }
}

#[async_trait]
impl KeyScan for RedisKeyScanner {
    async fn scan(&self, pattern: &str) -> AppResult<Vec<String>> {
        let mut conn = self.conn.clone();
        let keys: Vec<String> = redis::cmd("KEYS")
            .arg(pattern)
            .query_async(&mut conn)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Discovery, "Key scan failed", e))?;
        Ok(keys)
    }
}

/// Mask password in a Redis URL for safe logging.
fn mask_redis_url(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
            if colon_pos >= scheme_end {
                return format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..]);
            }
        }
    }
    url.to_string()
}
