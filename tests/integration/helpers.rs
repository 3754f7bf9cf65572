//! Shared test helpers for integration tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::header::{COOKIE, LOCATION, SET_COOKIE};
use http::{Request, Response, StatusCode};
use tower::ServiceExt;

use boardhub_api::router::build_router;
use boardhub_api::state::{AppState, BoardRuntime};
use boardhub_auth::oauth::{IdentityProvider, UserProfile};
use boardhub_auth::session::{MemorySessionStore, SessionRecord, SessionStore};
use boardhub_core::config::AppConfig;
use boardhub_core::error::AppError;
use boardhub_core::result::AppResult;
use boardhub_core::types::{AccessMode, BoardDescriptor, RedisConnectionParams};

/// Identity provider fixture. The authorization code selects the
/// profile the "provider" returns.
pub struct MockProvider;

#[async_trait]
impl IdentityProvider for MockProvider {
    fn authorize_url(&self, state: &str) -> String {
        format!("https://provider.test/authorize?state={state}")
    }

    async fn exchange_code(&self, code: &str) -> AppResult<UserProfile> {
        let email = match code {
            "code-ok" => Some("pat@example.com"),
            "code-noemail" => None,
            "code-subdomain" => Some("pat@sub.example.com"),
            "code-outsider" => Some("pat@evil.net"),
            _ => return Err(AppError::external("unknown authorization code")),
        };
        Ok(UserProfile {
            provider_id: "g-7".to_string(),
            email: email.map(String::from),
            display_name: "Pat".to_string(),
        })
    }
}

/// Session store whose writes always fail, for the persistence-failure
/// path.
pub struct FailingSessionStore;

#[async_trait]
impl SessionStore for FailingSessionStore {
    async fn get(&self, _token: &str) -> AppResult<Option<SessionRecord>> {
        Ok(None)
    }

    async fn put(&self, _token: &str, _record: &SessionRecord) -> AppResult<()> {
        Err(AppError::session("simulated write failure"))
    }

    async fn invalidate(&self, _token: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Test application context.
pub struct TestApp {
    /// The axum router for making test requests.
    pub router: Router,
}

impl TestApp {
    /// App with one full-access and one read-only board.
    pub fn new() -> Self {
        Self::with_boards(vec![
            board("/board1", AccessMode::FullAccess, &["emails", "payments"]),
            board("/board2", AccessMode::ReadOnly, &[]),
        ])
    }

    /// App with the given board runtimes and the in-memory store.
    pub fn with_boards(boards: Vec<BoardRuntime>) -> Self {
        Self::build(boards, Arc::new(MemorySessionStore::new()))
    }

    /// App whose session store rejects every write.
    pub fn with_failing_store() -> Self {
        Self::build(Vec::new(), Arc::new(FailingSessionStore))
    }

    fn build(boards: Vec<BoardRuntime>, sessions: Arc<dyn SessionStore>) -> Self {
        let config = Arc::new(test_config());
        let state = AppState::new(config, sessions, Arc::new(MockProvider), boards);
        Self {
            router: build_router(state),
        }
    }

    /// One request against the router.
    pub async fn get(&self, uri: &str) -> Response<Body> {
        self.request(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    /// One request with a Cookie header.
    pub async fn get_with_cookie(&self, uri: &str, cookie: &str) -> Response<Body> {
        self.request(
            Request::get(uri)
                .header(COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// One POST with a Cookie header.
    pub async fn post_with_cookie(&self, uri: &str, cookie: &str) -> Response<Body> {
        self.request(
            Request::post(uri)
                .header(COOKIE, cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn request(&self, request: Request<Body>) -> Response<Body> {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("request failed")
    }

    /// Drive the full sign-in flow with `code` and return the final
    /// callback response plus the state cookie used.
    pub async fn complete_auth(&self, code: &str) -> Response<Body> {
        let begin = self.get("/auth/google").await;
        assert_eq!(begin.status(), StatusCode::SEE_OTHER);

        let state_cookie = first_cookie(&begin).expect("state cookie");
        let nonce = location(&begin)
            .rsplit("state=")
            .next()
            .expect("nonce in authorize url")
            .to_string();

        self.request(
            Request::get(format!("/auth/google/callback?code={code}&state={nonce}"))
                .header(COOKIE, state_cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    /// Full sign-in with an admitted profile; returns the session
    /// Cookie header value for subsequent requests.
    pub async fn login(&self) -> String {
        let callback = self.complete_auth("code-ok").await;
        assert_eq!(callback.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&callback), "/");
        session_cookie(&callback).expect("session cookie set on login")
    }
}

/// Build a board runtime fixture.
pub fn board(path: &str, mode: AccessMode, queues: &[&str]) -> BoardRuntime {
    BoardRuntime {
        descriptor: BoardDescriptor {
            mount_path: path.to_string(),
            connection: RedisConnectionParams {
                host: "localhost".to_string(),
                port: 6379,
                db: 1,
                password: None,
            },
            access_mode: mode,
        },
        queues: queues.iter().map(|q| q.to_string()).collect(),
    }
}

fn test_config() -> AppConfig {
    let env: HashMap<String, String> = [
        ("GOOGLE_CLIENT_ID", "test-client"),
        ("GOOGLE_CLIENT_SECRET", "test-secret"),
        ("ALLOWED_DOMAINS", "example.com"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect();

    AppConfig::from_lookup(&move |key: &str| env.get(key).cloned()).expect("test config")
}

/// The Location header of a redirect.
pub fn location(response: &Response<Body>) -> String {
    response
        .headers()
        .get(LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_string()
}

/// First Set-Cookie pair (name=value), suitable as a Cookie header.
pub fn first_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .next()
        .map(cookie_pair)
}

/// The session cookie pair from a response, if one was set.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .map(cookie_pair)
        .find(|c| c.starts_with("boardhub_session="))
}

fn cookie_pair(value: &http::HeaderValue) -> String {
    value
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string()
}

/// Read the full response body as a string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf8 body")
}
