//! Redis-backed session store.

use async_trait::async_trait;
use chrono::Utc;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;

use boardhub_core::error::{AppError, ErrorKind};
use boardhub_core::result::AppResult;

use super::store::{SessionRecord, SessionStore};

const KEY_PREFIX: &str = "boardhub:session:";

/// Session store shared across replicas through Redis. Records are
/// serialized as JSON and carry their TTL via `SET EX`, so Redis evicts
/// them at expiry and `get` never sees a stale record.
#[derive(Clone)]
pub struct RedisSessionStore {
    conn: ConnectionManager,
}

impl RedisSessionStore {
    /// Connect to the session Redis instance.
    pub async fn connect(url: &str) -> AppResult<Self> {
        let client = redis::Client::open(url).map_err(|e| {
            AppError::with_source(ErrorKind::Session, "Failed to create Redis client", e)
        })?;
        let conn = ConnectionManager::new(client).await.map_err(|e| {
            AppError::with_source(ErrorKind::Session, "Failed to connect to session Redis", e)
        })?;
        Ok(Self { conn })
    }

    fn key(token: &str) -> String {
        format!("{KEY_PREFIX}{token}")
    }

    fn map_err(e: redis::RedisError) -> AppError {
        AppError::with_source(ErrorKind::Session, format!("Redis error: {e}"), e)
    }
}

#[async_trait]
impl SessionStore for RedisSessionStore {
    async fn get(&self, token: &str) -> AppResult<Option<SessionRecord>> {
        let mut conn = self.conn.clone();
        let raw: Option<String> = conn.get(Self::key(token)).await.map_err(Self::map_err)?;
        match raw {
            Some(json) => {
                let record: SessionRecord = serde_json::from_str(&json)?;
                // Redis TTL is the authority, but guard against clock skew.
                Ok(Some(record).filter(|r| !r.is_expired()))
            }
            None => Ok(None),
        }
    }

    async fn put(&self, token: &str, record: &SessionRecord) -> AppResult<()> {
        let ttl = (record.expires_at - Utc::now()).num_seconds().max(1) as u64;
        let json = serde_json::to_string(record)?;
        let mut conn = self.conn.clone();
        let _: () = conn
            .set_ex(Self::key(token), json, ttl)
            .await
            .map_err(Self::map_err)?;
        Ok(())
    }

    async fn invalidate(&self, token: &str) -> AppResult<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(Self::key(token)).await.map_err(Self::map_err)?;
        Ok(())
    }
}
