use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde_json::{json, Value};

use crate::error::PsaError;
use crate::models::{CardDraft, CardFilter, StoredCard};
use crate::server::error::AppError;
use crate::server::state::AppState;

/// POST /api/cards/add
///
/// Add a card to the collection. The body is any subset of a looked-up
/// card plus `purchase_price`, `current_value` and `notes`.
pub async fn add_card(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CardDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Json(draft) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;
    let card = state.store.add(draft)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({ "success": true, "card": card })),
    ))
}

/// GET /api/cards?name=charizard&set=pokemon&grade=10
///
/// List the collection in insertion order, optionally filtered.
pub async fn list_cards(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<CardFilter>,
) -> Result<Json<Vec<StoredCard>>, AppError> {
    Ok(Json(state.store.list(&filter)?))
}

/// GET /api/cards/:id
pub async fn get_card(
    State(state): State<Arc<AppState>>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<StoredCard>, AppError> {
    let Path(id) = id.map_err(|e| AppError::bad_request(e.body_text()))?;
    let card = state
        .store
        .get(id)?
        .ok_or_else(|| PsaError::NotFound(format!("no card with id {id}")))?;
    Ok(Json(card))
}

/// DELETE /api/cards/:id
///
/// Idempotent: deleting an unknown id still succeeds.
pub async fn delete_card(
    State(state): State<Arc<AppState>>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let Path(id) = id.map_err(|e| AppError::bad_request(e.body_text()))?;
    state.store.delete(id)?;
    Ok(Json(json!({ "success": true })))
}
