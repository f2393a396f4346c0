//! The owned-card collection.
//!
//! [`CardStore`] is the seam the HTTP layer talks to; [`MemoryStore`] keeps
//! everything in process memory and loses it on restart.

use std::sync::{Mutex, MutexGuard};

use tracing::info;

use crate::error::{PsaError, Result};
use crate::models::{CardDraft, CardFilter, StoredCard};
use crate::stats::CollectionStats;

pub trait CardStore: Send + Sync {
    /// Store `draft` under a fresh id.
    ///
    /// Fails with [`PsaError::DuplicateCert`] when a card with the same
    /// non-empty cert number is already present.
    fn add(&self, draft: CardDraft) -> Result<StoredCard>;

    /// Cards matching `filter`, in insertion order.
    fn list(&self, filter: &CardFilter) -> Result<Vec<StoredCard>>;

    fn get(&self, id: u64) -> Result<Option<StoredCard>>;

    /// Remove the card with `id`. Returns whether anything was removed.
    fn delete(&self, id: u64) -> Result<bool>;

    /// Aggregate statistics over the whole collection.
    fn stats(&self) -> Result<CollectionStats> {
        let cards = self.list(&CardFilter::default())?;
        Ok(CollectionStats::from_cards(&cards))
    }
}

// ---------------------------------------------------------------------------
// MemoryStore
// ---------------------------------------------------------------------------

#[derive(Debug)]
struct Inner {
    cards: Vec<StoredCard>,
    next_id: u64,
}

#[derive(Debug)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner {
                cards: Vec::new(),
                next_id: 1,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| PsaError::Unexpected("collection lock poisoned".into()))
    }
}

impl CardStore for MemoryStore {
    fn add(&self, draft: CardDraft) -> Result<StoredCard> {
        let mut inner = self.lock()?;

        if let Some(cert) = draft.cert_key() {
            if inner.cards.iter().any(|c| c.card.cert_number.trim() == cert) {
                return Err(PsaError::DuplicateCert(cert.to_string()));
            }
        }

        let id = inner.next_id;
        let stored = StoredCard::from_draft(id, draft, today());
        inner.cards.push(stored.clone());
        inner.next_id += 1;

        info!(id, cert = %stored.card.cert_number, "card added");
        Ok(stored)
    }

    fn list(&self, filter: &CardFilter) -> Result<Vec<StoredCard>> {
        let inner = self.lock()?;
        Ok(inner
            .cards
            .iter()
            .filter(|c| filter.matches(c))
            .cloned()
            .collect())
    }

    fn get(&self, id: u64) -> Result<Option<StoredCard>> {
        let inner = self.lock()?;
        Ok(inner.cards.iter().find(|c| c.id == id).cloned())
    }

    fn delete(&self, id: u64) -> Result<bool> {
        let mut inner = self.lock()?;
        let before = inner.cards.len();
        inner.cards.retain(|c| c.id != id);
        let removed = inner.cards.len() != before;
        if removed {
            info!(id, "card deleted");
        }
        Ok(removed)
    }
}

/// Today's date in server local time, `YYYY-MM-DD`.
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}
