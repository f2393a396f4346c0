use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;

use crate::server::error::AppError;
use crate::server::state::AppState;
use crate::stats::CollectionStats;

/// GET /api/stats
pub async fn get_stats(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CollectionStats>, AppError> {
    Ok(Json(state.store.stats()?))
}
