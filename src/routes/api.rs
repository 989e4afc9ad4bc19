//! `/api/hello`: the relay endpoint the page's probe calls.

use axum::{extract::State, http::StatusCode, Json};
use serde_json::Value;
use tracing::instrument;

use crate::state::AppState;

/// Forward to the backend and pass its body through, or answer 502.
#[instrument(name = "api::hello", skip(state))]
pub async fn hello(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let (status, body) = state.relay.exchange().await;
    (status, Json(body))
}
