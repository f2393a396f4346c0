use serde::{Deserialize, Serialize};

use crate::models::StoredCard;

/// Count, total and mean of `current_value` across the collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub total_cards: usize,
    pub total_value: f64,
    pub average_value: f64,
}

impl CollectionStats {
    /// Both money figures are rounded to cents. The average is taken from
    /// the unrounded total, which saturates at `f64::MAX` instead of
    /// overflowing to infinity.
    pub fn from_cards(cards: &[StoredCard]) -> Self {
        let total_cards = cards.len();
        let total = cards
            .iter()
            .map(|c| c.current_value)
            .sum::<f64>()
            .clamp(f64::MIN, f64::MAX);
        let average = if total_cards > 0 {
            total / total_cards as f64
        } else {
            0.0
        };
        Self {
            total_cards,
            total_value: round_cents(total),
            average_value: round_cents(average),
        }
    }
}

/// Round to two decimals. Values too large to scale carry no cents and are
/// returned unchanged.
pub fn round_cents(value: f64) -> f64 {
    let scaled = value * 100.0;
    if scaled.is_finite() {
        scaled.round() / 100.0
    } else {
        value
    }
}
