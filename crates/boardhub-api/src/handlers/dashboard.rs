//! Landing page handler.

use axum::Extension;
use axum::extract::State;
use axum::response::Html;

use boardhub_core::types::Principal;

use crate::state::AppState;
use crate::views;

/// GET / — guarded landing page listing every board mount.
///
/// The principal extension is inserted by the session guard; this route
/// is never reachable without it.
pub async fn landing(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Html<String> {
    Html(views::dashboard::render(&principal, &state.boards))
}
