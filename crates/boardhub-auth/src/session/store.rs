//! Session store trait and provider dispatch.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use boardhub_core::config::session::{SessionConfig, SessionStoreProvider};
use boardhub_core::result::AppResult;
use boardhub_core::types::Principal;

/// A persisted session: the authenticated principal plus its expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The principal this browser session is bound to.
    pub principal: Principal,
    /// Absolute expiry; records past this instant are treated as absent.
    pub expires_at: DateTime<Utc>,
}

impl SessionRecord {
    /// Create a record expiring `ttl_hours` from now.
    pub fn new(principal: Principal, ttl_hours: u64) -> Self {
        Self {
            principal,
            expires_at: Utc::now() + Duration::hours(ttl_hours as i64),
        }
    }

    /// True once the record's TTL has elapsed.
    pub fn is_expired(&self) -> bool {
        self.expires_at <= Utc::now()
    }
}

/// Generate a fresh opaque session token.
pub fn new_session_token() -> String {
    Uuid::new_v4().simple().to_string()
}

/// Keyed session persistence: `get`/`put`/`invalidate` by token.
///
/// Passed into the auth gate as an explicit dependency so tests use the
/// in-memory store and production can use Redis without touching gate
/// logic.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Look up a live session; expired records read as `None`.
    async fn get(&self, token: &str) -> AppResult<Option<SessionRecord>>;

    /// Persist a session record under `token`.
    ///
    /// Callers must treat a failure here as a failed login — redirecting
    /// an authenticated-but-unsaved browser to `/` causes an infinite
    /// redirect loop.
    async fn put(&self, token: &str, record: &SessionRecord) -> AppResult<()>;

    /// Remove a session record.
    async fn invalidate(&self, token: &str) -> AppResult<()>;
}

/// Construct the configured session store provider.
pub async fn build_session_store(config: &SessionConfig) -> AppResult<Arc<dyn SessionStore>> {
    match &config.store {
        SessionStoreProvider::Memory => {
            info!("Initializing in-memory session store");
            Ok(Arc::new(super::memory::MemorySessionStore::new()))
        }
        SessionStoreProvider::Redis { url } => {
            info!("Initializing Redis session store");
            let store = super::redis::RedisSessionStore::connect(url).await?;
            Ok(Arc::new(store))
        }
    }
}
