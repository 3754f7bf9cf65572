//! Built-in board widget.
//!
//! `render(board) -> Router` is the whole monitoring-view boundary: the
//! widget receives the discovered queue set and the access mode, never
//! queue contents. In ReadOnly mode the mutating route is simply not
//! registered.

use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::{get, post};
use tracing::info;

use boardhub_core::types::QueueName;

use crate::state::BoardRuntime;

use super::escape;

/// State local to one mounted board widget.
#[derive(Debug, Clone)]
struct BoardView {
    mount_path: String,
    queues: Arc<Vec<QueueName>>,
    read_only: bool,
}

/// Build the mountable router for one board.
pub fn render(board: &BoardRuntime) -> Router {
    let view = BoardView {
        mount_path: board.descriptor.mount_path.clone(),
        queues: Arc::new(board.queues.clone()),
        read_only: board.descriptor.access_mode.is_read_only(),
    };

    let router = Router::new()
        .route("/", get(index))
        .route("/queues/{name}", get(queue_page));

    let router = if view.read_only {
        router
    } else {
        router.route("/queues/{name}/drain", post(drain_queue))
    };

    router.with_state(view)
}

/// Board index: queue list plus the access-mode badge.
async fn index(State(view): State<BoardView>) -> Html<String> {
    let mode = if view.read_only {
        "read-only"
    } else {
        "full access"
    };
    let items: String = view
        .queues
        .iter()
        .map(|q| {
            format!(
                r#"<li><a href="{base}/queues/{q}">{q}</a></li>"#,
                base = escape(&view.mount_path),
                q = escape(q),
            )
        })
        .collect();

    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{path}</title></head>
<body>
<h1>{path} <small>({mode})</small></h1>
<ul>{items}</ul>
<p><a href="/">Back to dashboard</a></p>
</body>
</html>
"#,
        path = escape(&view.mount_path),
    ))
}

/// Per-queue page. Unknown names are 404 — the queue set is fixed at
/// startup.
async fn queue_page(
    State(view): State<BoardView>,
    Path(name): Path<String>,
) -> Result<Html<String>, StatusCode> {
    if !view.queues.contains(&name) {
        return Err(StatusCode::NOT_FOUND);
    }

    let drain = if view.read_only {
        String::new()
    } else {
        format!(
            r#"<form method="post" action="{base}/queues/{q}/drain"><button>Drain queue</button></form>"#,
            base = escape(&view.mount_path),
            q = escape(&name),
        )
    };

    Ok(Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>{q}</title></head>
<body>
<h1>Queue: {q}</h1>
{drain}
<p><a href="{base}">Back to board</a></p>
</body>
</html>
"#,
        q = escape(&name),
        base = escape(&view.mount_path),
    )))
}

/// Mutating action, only registered in FullAccess mode.
async fn drain_queue(
    State(view): State<BoardView>,
    Path(name): Path<String>,
) -> Result<StatusCode, StatusCode> {
    if !view.queues.contains(&name) {
        return Err(StatusCode::NOT_FOUND);
    }
    info!(board = %view.mount_path, queue = %name, "Drain requested");
    Ok(StatusCode::ACCEPTED)
}
