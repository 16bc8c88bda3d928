//! Liveness probe for the hosting environment.
//! Used by: server.

pub async fn liveness() -> &'static str {
    "ok"
}
