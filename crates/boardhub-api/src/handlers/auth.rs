//! Auth flow handlers — begin, callback, failure view, logout.
//!
//! Every callback outcome is a redirect: success to `/`, any rejection
//! to the failure view with a distinct error code. The session record
//! is persisted **before** the success redirect is sent; a failed write
//! redirects to the failure view instead of `/`, otherwise the guard
//! would bounce the browser straight back into the flow forever.

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::Cookie;
use serde::Deserialize;
use tracing::{error, info, warn};

use boardhub_auth::gate::validate_profile;
use boardhub_auth::oauth::new_state_nonce;
use boardhub_auth::session::{SessionRecord, new_session_token};
use boardhub_core::config::session::SESSION_COOKIE;

use crate::error::ApiError;
use crate::state::AppState;
use crate::views;

/// Short-lived cookie carrying the authorization state nonce.
const STATE_COOKIE: &str = "boardhub_oauth_state";

/// Query parameters Google sends to the callback.
#[derive(Debug, Deserialize)]
pub struct CallbackParams {
    /// Authorization code, present on success.
    pub code: Option<String>,
    /// Echoed state nonce.
    pub state: Option<String>,
    /// Provider-side error code (e.g. denied consent).
    pub error: Option<String>,
}

/// Query parameters of the failure view.
#[derive(Debug, Deserialize)]
pub struct FailedParams {
    /// Error code set by the callback handler.
    pub error: Option<String>,
}

/// GET /auth/google — begin the authorization flow.
pub async fn begin(State(state): State<AppState>, jar: SignedCookieJar) -> Response {
    let nonce = new_state_nonce();
    let url = state.provider.authorize_url(&nonce);

    let jar = jar.add(
        Cookie::build((STATE_COOKIE, nonce))
            .path("/")
            .http_only(true)
            .build(),
    );

    (jar, Redirect::to(&url)).into_response()
}

/// GET /auth/google/callback — complete the authorization flow.
pub async fn callback(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Query(params): Query<CallbackParams>,
) -> Response {
    // Consume the state cookie whatever happens next.
    let expected_state = jar.get(STATE_COOKIE).map(|c| c.value().to_string());
    let jar = jar.remove(Cookie::build((STATE_COOKIE, "")).path("/").build());

    if let Some(code) = params.error {
        warn!(code = %code, "Identity provider returned an error");
        return (jar, failure_redirect(&sanitize_code(&code))).into_response();
    }

    match (expected_state.as_deref(), params.state.as_deref()) {
        (Some(expected), Some(got)) if expected == got => {}
        _ => {
            warn!("Authorization state nonce missing or mismatched");
            return (jar, failure_redirect("state_mismatch")).into_response();
        }
    }

    let Some(code) = params.code else {
        return (jar, failure_redirect("missing_code")).into_response();
    };

    let profile = match state.provider.exchange_code(&code).await {
        Ok(profile) => profile,
        Err(e) => {
            error!(error = %e, "Authorization code exchange failed");
            return (jar, failure_redirect("exchange_failed")).into_response();
        }
    };

    let principal = match validate_profile(&profile, &state.config.auth.allowed_domains) {
        Ok(principal) => principal,
        Err(rejection) => {
            info!(reason = %rejection, "Sign-in rejected");
            return (jar, failure_redirect(rejection.code())).into_response();
        }
    };

    // Persist before redirecting; an unsaved session must not reach `/`.
    let token = new_session_token();
    let record = SessionRecord::new(principal.clone(), state.config.session.ttl_hours);
    if let Err(e) = state.sessions.put(&token, &record).await {
        error!(error = %e, "Session write failed, aborting login");
        return (jar, failure_redirect("session")).into_response();
    }

    info!(email = %principal.email, "Authenticated");

    let jar = jar.add(
        Cookie::build((SESSION_COOKIE, token))
            .path("/")
            .http_only(true)
            .build(),
    );

    (jar, Redirect::to("/")).into_response()
}

/// GET /auth/failed — human-readable failure view.
pub async fn failed(
    State(state): State<AppState>,
    Query(params): Query<FailedParams>,
) -> Html<String> {
    let code = params.error.unwrap_or_else(|| "unknown".to_string());
    Html(views::auth_failed::render(
        &code,
        &state.config.auth.allowed_domains,
    ))
}

/// GET /logout — invalidate the session and return to `/`.
pub async fn logout(
    State(state): State<AppState>,
    jar: SignedCookieJar,
) -> Result<Response, ApiError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        state.sessions.invalidate(cookie.value()).await?;
    }
    let jar = jar.remove(Cookie::build((SESSION_COOKIE, "")).path("/").build());
    Ok((jar, Redirect::to("/")).into_response())
}

fn failure_redirect(code: &str) -> Redirect {
    Redirect::to(&format!("/auth/failed?error={code}"))
}

/// Keep provider-supplied codes URL- and HTML-safe.
fn sanitize_code(code: &str) -> String {
    let clean: String = code
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect();
    if clean.is_empty() {
        "provider_error".to_string()
    } else {
        clean
    }
}
