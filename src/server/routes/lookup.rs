use std::sync::Arc;

use axum::extract::{Path, State};
use axum::response::Json;
use serde_json::{json, Value};
use tracing::info;

use crate::server::error::AppError;
use crate::server::state::AppState;

/// GET /api/psa/lookup/:cert_number
///
/// Look up a PSA cert, normalize it and attach front/back images when the
/// image endpoint cooperates.
pub async fn lookup_cert(
    State(state): State<Arc<AppState>>,
    Path(cert_number): Path<String>,
) -> Result<Json<Value>, AppError> {
    let card = state.client.lookup_card(&cert_number).await?;
    info!(cert = %card.cert_number, name = %card.name, "lookup succeeded");

    Ok(Json(json!({
        "success": true,
        "card_data": card
    })))
}
