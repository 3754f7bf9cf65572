//! The auth gate.
//!
//! Single access-control point for every protected route: a request
//! passes only when its signed session cookie resolves to a live store
//! record. Everything else — no cookie, unknown token, expired record,
//! store failure — redirects into the authorization flow.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;
use tracing::debug;

use boardhub_core::config::session::SESSION_COOKIE;

use crate::state::AppState;

/// Middleware wrapping every guarded route.
///
/// On success the resolved [`Principal`](boardhub_core::types::Principal)
/// is inserted into request extensions for handlers that render it.
pub async fn require_session(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let token = jar.get(SESSION_COOKIE).map(|c| c.value().to_string());

    if let Some(token) = token {
        match state.sessions.get(&token).await {
            Ok(Some(record)) => {
                request.extensions_mut().insert(record.principal);
                return next.run(request).await;
            }
            Ok(None) => {
                debug!("Session token unknown or expired, redirecting to authorization");
            }
            Err(e) => {
                // Fail closed: a store we cannot read is an
                // unauthenticated request.
                tracing::error!(error = %e, "Session store lookup failed");
            }
        }
    }

    Redirect::to("/auth/google").into_response()
}
