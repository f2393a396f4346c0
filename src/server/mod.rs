//! JSON HTTP surface over the PSA client and the collection store.

pub mod error;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub use error::AppError;
pub use state::AppState;

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let index = ServeFile::new(state.static_dir.join("index.html"));
    let assets = ServeDir::new(&state.static_dir);

    Router::new()
        .route_service("/", index)
        .nest_service("/static", assets)
        .route("/health", get(routes::meta::health))
        .route(
            "/api/psa/lookup/{cert_number}",
            get(routes::lookup::lookup_cert),
        )
        .route("/api/cards/add", post(routes::cards::add_card))
        .route("/api/cards", get(routes::cards::list_cards))
        .route(
            "/api/cards/{id}",
            get(routes::cards::get_card).delete(routes::cards::delete_card),
        )
        .route("/api/stats", get(routes::stats::get_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
