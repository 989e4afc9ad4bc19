//! Health check endpoint for container orchestration.
//!
//! Liveness of this service only. Backend reachability is what `/api/hello`
//! reports; a dead backend must not make load balancers drop the frontend.

/// Health check handler.
pub async fn health() -> &'static str {
    "ok"
}
