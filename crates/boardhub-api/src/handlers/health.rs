//! Liveness handler.

/// GET /healthz — unguarded, always 200.
pub async fn healthz() -> &'static str {
    "OK"
}
