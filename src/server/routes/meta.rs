use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use crate::server::state::AppState;

/// GET /health
///
/// Liveness probe. Also reports whether a PSA token is configured.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "psa_configured": state.client.is_configured()
    }))
}
