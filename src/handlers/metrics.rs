//! Metrics snapshot endpoint.
//! Used by: server.

use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, CONTENT_TYPE};
use axum::response::IntoResponse;
use axum::Json;

use crate::snapshot::MetricsSnapshot;
use crate::state::AppState;

pub const NO_CACHE: &str = "no-cache, no-store, must-revalidate";

/// Serves the current snapshot. The request itself is never inspected.
pub async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let snapshot = MetricsSnapshot::at(state.clock.now());
    tracing::debug!(uptime = snapshot.system.uptime, "metrics snapshot served");
    (
        [(CONTENT_TYPE, "application/json"), (CACHE_CONTROL, NO_CACHE)],
        Json(snapshot),
    )
}
