//! PSA cert lookup and graded-card collection tracker.
//!
//! Looks up certification records from the PSA public API, reshapes them
//! into flat [`CardRecord`]s with front/back image URLs, and keeps an
//! in-memory collection of owned cards with purchase and value annotations.
//! The [`server`] module exposes everything as a JSON HTTP API.
//!
//! # Quick start
//!
//! ```no_run
//! use psa_collection::{CardDraft, CardStore, MemoryStore, PsaClient};
//!
//! # async fn example() -> psa_collection::Result<()> {
//! let client = PsaClient::builder()
//!     .token(std::env::var("PSA_AUTH_TOKEN").ok())
//!     .build()?;
//!
//! // Cert lookup plus best-effort images
//! let card = client.lookup_card("1234-5678").await?;
//!
//! // Track it
//! let store = MemoryStore::new();
//! let mut draft = CardDraft::from(card);
//! draft.current_value = 150.0;
//! store.add(draft)?;
//! println!("{:?}", store.stats()?);
//! # Ok(())
//! # }
//! ```

pub mod cert;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod server;
pub mod stats;
pub mod store;

pub use cert::CertNumber;
pub use client::{PsaClient, PsaClientBuilder};
pub use config::AppConfig;
pub use error::{PsaError, Result};
pub use models::{
    CardDraft, CardFilter, CardRecord, ImageLookup, ImagePayload, ImagesUnavailable,
    PsaCertResponse, StoredCard,
};
pub use stats::CollectionStats;
pub use store::{CardStore, MemoryStore};
