//! Auth gate and session lifecycle tests.

use axum::body::Body;
use http::{Request, StatusCode};
use http::header::COOKIE;

use crate::helpers::{TestApp, body_text, location, session_cookie};

#[tokio::test]
async fn test_healthz_is_unguarded() {
    let app = TestApp::new();
    let res = app.get("/healthz").await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_text(res).await, "OK");
}

#[tokio::test]
async fn test_anonymous_root_redirects_to_authorization() {
    let app = TestApp::new();
    let res = app.get("/").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/auth/google");
}

#[tokio::test]
async fn test_anonymous_board_redirects_to_authorization() {
    let app = TestApp::new();
    for uri in ["/board1", "/board1/queues/emails", "/board2"] {
        let res = app.get(uri).await;
        assert_eq!(res.status(), StatusCode::SEE_OTHER, "uri: {uri}");
        assert_eq!(location(&res), "/auth/google");
    }
}

#[tokio::test]
async fn test_begin_redirects_to_provider_with_state() {
    let app = TestApp::new();
    let res = app.get("/auth/google").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert!(location(&res).starts_with("https://provider.test/authorize?state="));
}

#[tokio::test]
async fn test_full_login_flow_admits_allowed_domain() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let res = app.get_with_cookie("/", &cookie).await;
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_text(res).await;
    assert!(html.contains("pat@example.com"));
    assert!(html.contains("/board1"));
}

#[tokio::test]
async fn test_callback_without_email_is_rejected_distinctly() {
    let app = TestApp::new();
    let res = app.complete_auth("code-noemail").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/auth/failed?error=no_email");
    assert!(session_cookie(&res).is_none());
}

#[tokio::test]
async fn test_callback_subdomain_email_is_rejected() {
    // example.com is allowed; sub.example.com must not match.
    let app = TestApp::new();
    let res = app.complete_auth("code-subdomain").await;
    assert_eq!(location(&res), "/auth/failed?error=domain_not_allowed");
}

#[tokio::test]
async fn test_callback_foreign_domain_is_rejected() {
    let app = TestApp::new();
    let res = app.complete_auth("code-outsider").await;
    assert_eq!(location(&res), "/auth/failed?error=domain_not_allowed");
    assert!(session_cookie(&res).is_none());
}

#[tokio::test]
async fn test_callback_without_state_cookie_fails() {
    let app = TestApp::new();
    let res = app
        .get("/auth/google/callback?code=code-ok&state=forged")
        .await;
    assert_eq!(location(&res), "/auth/failed?error=state_mismatch");
}

#[tokio::test]
async fn test_provider_error_routes_to_failure_view() {
    let app = TestApp::new();
    let res = app.get("/auth/google/callback?error=access_denied").await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/auth/failed?error=access_denied");
}

#[tokio::test]
async fn test_session_write_failure_redirects_to_failure_not_root() {
    let app = TestApp::with_failing_store();
    let res = app.complete_auth("code-ok").await;
    assert_eq!(location(&res), "/auth/failed?error=session");
    assert!(session_cookie(&res).is_none());
}

#[tokio::test]
async fn test_failure_view_messages_are_distinct() {
    let app = TestApp::new();

    let no_email = body_text(app.get("/auth/failed?error=no_email").await).await;
    assert!(no_email.contains("no email address"));

    let domain = body_text(app.get("/auth/failed?error=domain_not_allowed").await).await;
    assert!(domain.contains("Allowed domains: example.com"));

    let denied = body_text(app.get("/auth/failed?error=access_denied").await).await;
    assert!(denied.contains("access_denied"));
}

#[tokio::test]
async fn test_logout_returns_session_to_anonymous() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let res = app.get_with_cookie("/logout", &cookie).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/");

    // The same token must no longer be admitted.
    let res = app.get_with_cookie("/", &cookie).await;
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/auth/google");
}

#[tokio::test]
async fn test_tampered_session_cookie_is_not_admitted() {
    let app = TestApp::new();
    let res = app
        .request(
            Request::get("/")
                .header(COOKIE, "boardhub_session=forged-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
    // Unsigned cookie fails signature verification: anonymous.
    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&res), "/auth/google");
}
