use serde::{Deserialize, Serialize};

use super::lenient;

// ---------------------------------------------------------------------------
// CardRecord — Flat card shape produced by normalizing a PSA cert
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardRecord {
    #[serde(deserialize_with = "lenient::string")]
    pub cert_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub name: String,
    #[serde(deserialize_with = "lenient::string")]
    pub set: String,
    #[serde(deserialize_with = "lenient::string")]
    pub card_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub spec_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub grade: String,
    #[serde(deserialize_with = "lenient::string")]
    pub grade_description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub year: String,
    #[serde(deserialize_with = "lenient::string")]
    pub brand: String,
    #[serde(deserialize_with = "lenient::string")]
    pub category: String,
    #[serde(deserialize_with = "lenient::string")]
    pub variety: String,
    #[serde(deserialize_with = "lenient::string")]
    pub label_type: String,
    #[serde(deserialize_with = "lenient::integer")]
    pub total_population: i64,
    #[serde(deserialize_with = "lenient::integer")]
    pub population_higher: i64,
    #[serde(deserialize_with = "lenient::boolean")]
    pub is_dual_cert: bool,
    #[serde(deserialize_with = "lenient::boolean")]
    pub reverse_bar_code: bool,
    #[serde(deserialize_with = "lenient::string")]
    pub image_url: String,
    #[serde(deserialize_with = "lenient::string")]
    pub image_front: String,
    #[serde(deserialize_with = "lenient::string")]
    pub image_back: String,
}

// ---------------------------------------------------------------------------
// CardDraft — Body of an add request
// ---------------------------------------------------------------------------

/// A card as submitted for addition: any subset of the record fields plus
/// the owner's annotations.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardDraft {
    #[serde(flatten)]
    pub card: CardRecord,
    #[serde(default, deserialize_with = "lenient::number")]
    pub purchase_price: f64,
    #[serde(default, deserialize_with = "lenient::number")]
    pub current_value: f64,
    #[serde(default, deserialize_with = "lenient::string")]
    pub notes: String,
}

impl From<CardRecord> for CardDraft {
    fn from(card: CardRecord) -> Self {
        Self {
            card,
            ..Self::default()
        }
    }
}

impl CardDraft {
    /// Cert number to check for duplicates, if the draft carries one.
    pub fn cert_key(&self) -> Option<&str> {
        let cert = self.card.cert_number.trim();
        (!cert.is_empty()).then_some(cert)
    }
}

// ---------------------------------------------------------------------------
// StoredCard — A card held in the collection
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredCard {
    pub id: u64,
    #[serde(flatten)]
    pub card: CardRecord,
    pub purchase_price: f64,
    pub current_value: f64,
    pub notes: String,
    /// `YYYY-MM-DD`, server local time.
    pub added_date: String,
}

impl StoredCard {
    pub fn from_draft(id: u64, draft: CardDraft, added_date: String) -> Self {
        Self {
            id,
            card: draft.card,
            purchase_price: draft.purchase_price,
            current_value: draft.current_value,
            notes: draft.notes,
            added_date,
        }
    }
}

// ---------------------------------------------------------------------------
// CardFilter — Optional list filters
// ---------------------------------------------------------------------------

/// Filters for listing the collection. `name` and `set` are
/// case-insensitive substring matches, `grade` is exact.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CardFilter {
    pub name: Option<String>,
    pub set: Option<String>,
    pub grade: Option<String>,
}

impl CardFilter {
    pub fn matches(&self, stored: &StoredCard) -> bool {
        let contains = |haystack: &str, needle: &Option<String>| match needle.as_deref() {
            Some(n) if !n.is_empty() => haystack.to_lowercase().contains(&n.to_lowercase()),
            _ => true,
        };
        let grade_ok = match self.grade.as_deref() {
            Some(g) if !g.is_empty() => stored.card.grade == g,
            _ => true,
        };
        contains(&stored.card.name, &self.name) && contains(&stored.card.set, &self.set) && grade_ok
    }
}
