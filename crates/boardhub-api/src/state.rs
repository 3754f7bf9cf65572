//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

use boardhub_auth::oauth::IdentityProvider;
use boardhub_auth::session::SessionStore;
use boardhub_core::config::AppConfig;
use boardhub_core::types::{BoardDescriptor, QueueName};

/// One mounted board: its descriptor plus the queue set discovered at
/// startup. Queue sets are fixed for the life of the process.
#[derive(Debug, Clone)]
pub struct BoardRuntime {
    /// The board's config descriptor.
    pub descriptor: BoardDescriptor,
    /// Sorted, deduplicated queue names found at startup.
    pub queues: Vec<QueueName>,
}

/// Application state containing all shared dependencies.
///
/// Passed to every axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Session persistence, keyed by cookie token.
    pub sessions: Arc<dyn SessionStore>,
    /// OAuth identity provider.
    pub provider: Arc<dyn IdentityProvider>,
    /// The mounted boards with their discovered queue sets.
    pub boards: Arc<Vec<BoardRuntime>>,
    /// Key the session and state cookies are signed with.
    cookie_key: Key,
}

impl AppState {
    /// Assemble the application state. The cookie key is derived from
    /// the configured session secret.
    pub fn new(
        config: Arc<AppConfig>,
        sessions: Arc<dyn SessionStore>,
        provider: Arc<dyn IdentityProvider>,
        boards: Vec<BoardRuntime>,
    ) -> Self {
        let cookie_key = Key::derive_from(config.session.secret.as_bytes());
        Self {
            config,
            sessions,
            provider,
            boards: Arc::new(boards),
            cookie_key,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("boards", &self.boards)
            .finish()
    }
}

impl FromRef<AppState> for Key {
    fn from_ref(state: &AppState) -> Self {
        state.cookie_key.clone()
    }
}
