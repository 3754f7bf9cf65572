//! Route definitions.
//!
//! The mount orchestrator lives here: one nested, guarded widget per
//! board, the guarded landing page, the unguarded liveness endpoint,
//! and the auth-flow routes. Board mounting is not atomic — a board
//! whose discovery failed still mounts with an empty queue set.

use axum::{Router, middleware as axum_middleware, routing::get};
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;
use crate::views;

/// Build the complete axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let mut guarded = Router::new().route("/", get(handlers::dashboard::landing));

    for board in state.boards.iter() {
        info!(
            mount_path = %board.descriptor.mount_path,
            queues = board.queues.len(),
            read_only = board.descriptor.access_mode.is_read_only(),
            "Mounting board"
        );
        guarded = guarded.nest_service(&board.descriptor.mount_path, views::board::render(board));
    }

    // The session guard is the single access-control point; no route
    // behind it performs its own check.
    let guarded = guarded.layer(axum_middleware::from_fn_with_state(
        state.clone(),
        middleware::session::require_session,
    ));

    Router::new()
        .merge(guarded)
        .merge(auth_routes())
        .route("/healthz", get(handlers::health::healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Auth-flow endpoints: begin, callback, failure view, logout.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/google", get(handlers::auth::begin))
        .route("/auth/google/callback", get(handlers::auth::callback))
        .route("/auth/failed", get(handlers::auth::failed))
        .route("/logout", get(handlers::auth::logout))
}
