//! In-memory session store.

use async_trait::async_trait;
use dashmap::DashMap;

use boardhub_core::result::AppResult;

use super::store::{SessionRecord, SessionStore};

/// Process-local session store backed by a concurrent map.
///
/// The default provider, and the one integration tests run against.
/// Expired records are dropped lazily on lookup.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    records: DashMap<String, SessionRecord>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn get(&self, token: &str) -> AppResult<Option<SessionRecord>> {
        if let Some(record) = self.records.get(token) {
            if !record.is_expired() {
                return Ok(Some(record.clone()));
            }
        }
        // Lazy cleanup of the expired entry, if any.
        self.records.remove_if(token, |_, r| r.is_expired());
        Ok(None)
    }

    async fn put(&self, token: &str, record: &SessionRecord) -> AppResult<()> {
        self.records.insert(token.to_string(), record.clone());
        Ok(())
    }

    async fn invalidate(&self, token: &str) -> AppResult<()> {
        self.records.remove(token);
        Ok(())
    }
}
