//! Axum router and server setup.
//! Used by: main.

use std::net::SocketAddr;

use axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN;
use axum::http::HeaderValue;
use axum::routing::{any, get};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::error::Result;
use crate::handlers;
use crate::state::AppState;

/// Cross-origin reads are allowed by a response header only; preflight
/// requests are not intercepted and still reach the metrics handler.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/api/metrics", any(handlers::metrics::metrics))
        .route("/metrics", any(handlers::metrics::metrics))
        .route("/health", get(handlers::health::liveness))
        .layer(TraceLayer::new_for_http())
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .with_state(state)
}

pub async fn run(state: AppState, addr: SocketAddr) -> Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "listening");
    axum::serve(listener, router).await?;
    Ok(())
}
