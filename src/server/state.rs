use std::path::PathBuf;
use std::sync::Arc;

use crate::client::PsaClient;
use crate::store::CardStore;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Client for the PSA public API. Cheap to clone; holds the pooled
    /// `reqwest` client and the bearer token.
    pub client: PsaClient,

    /// The owned-card collection.
    pub store: Arc<dyn CardStore>,

    /// Directory served at `/` and `/static`.
    pub static_dir: PathBuf,
}

impl AppState {
    pub fn new(client: PsaClient, store: Arc<dyn CardStore>, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            client,
            store,
            static_dir: static_dir.into(),
        }
    }
}
