//! Board mounting and access-mode tests.

use std::collections::HashMap;

use http::StatusCode;

use boardhub_api::state::BoardRuntime;
use boardhub_core::config::boards::load_board_descriptors;
use boardhub_core::types::AccessMode;

use crate::helpers::{TestApp, board, body_text};

#[tokio::test]
async fn test_board_index_lists_queues() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let res = app.get_with_cookie("/board1", &cookie).await;
    assert_eq!(res.status(), StatusCode::OK);
    let html = body_text(res).await;
    assert!(html.contains("emails"));
    assert!(html.contains("payments"));
    assert!(html.contains("full access"));
}

#[tokio::test]
async fn test_read_only_board_shows_mode() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let res = app.get_with_cookie("/board2", &cookie).await;
    let html = body_text(res).await;
    assert!(html.contains("read-only"));
}

#[tokio::test]
async fn test_queue_page_known_and_unknown() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let res = app.get_with_cookie("/board1/queues/emails", &cookie).await;
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.get_with_cookie("/board1/queues/ghost", &cookie).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_full_access_board_accepts_mutating_action() {
    let app = TestApp::new();
    let cookie = app.login().await;

    let res = app
        .post_with_cookie("/board1/queues/emails/drain", &cookie)
        .await;
    assert_eq!(res.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_read_only_board_rejects_mutating_action() {
    let app = TestApp::with_boards(vec![board("/ro", AccessMode::ReadOnly, &["emails"])]);
    let cookie = app.login().await;

    let res = app.post_with_cookie("/ro/queues/emails/drain", &cookie).await;
    // The mutating route is never registered in read-only mode.
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn test_configured_path_without_leading_slash_mounts() {
    // A slashless BOARD_ROUTER value must come out of the loader
    // router-safe instead of aborting router construction.
    let env: HashMap<String, String> =
        [("BOARD_ROUTER_1".to_string(), "payments".to_string())].into();
    let descriptors = load_board_descriptors(&move |key: &str| env.get(key).cloned());

    let app = TestApp::with_boards(
        descriptors
            .into_iter()
            .map(|descriptor| BoardRuntime {
                descriptor,
                queues: vec!["jobs".to_string()],
            })
            .collect(),
    );
    let cookie = app.login().await;

    let res = app.get_with_cookie("/payments", &cookie).await;
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_empty_board_still_mounts() {
    // One board "unreachable" at discovery (empty queue set), one
    // healthy: both must be mounted and the landing page lists both.
    let app = TestApp::with_boards(vec![
        board("/broken", AccessMode::FullAccess, &[]),
        board("/healthy", AccessMode::FullAccess, &["jobs"]),
    ]);
    let cookie = app.login().await;

    let res = app.get_with_cookie("/broken", &cookie).await;
    assert_eq!(res.status(), StatusCode::OK);

    let landing = body_text(app.get_with_cookie("/", &cookie).await).await;
    assert!(landing.contains("/broken"));
    assert!(landing.contains("0 queue(s)"));
    assert!(landing.contains("/healthy"));
    assert!(landing.contains("1 queue(s)"));
}
