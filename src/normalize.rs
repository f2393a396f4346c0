//! Reshapes PSA responses into the flat [`CardRecord`] used everywhere else.

use tracing::debug;

use crate::error::{PsaError, Result};
use crate::models::{CardRecord, ImageLookup, ImagePayload, PsaCertResponse};

/// Map the nested `PSACert` object onto a [`CardRecord`].
///
/// `Brand` feeds both `set` and `brand`; `ImageFront` seeds `image_url`
/// until the image lookup overrides it.
pub fn normalize_cert(response: &PsaCertResponse) -> Result<CardRecord> {
    let cert = response.cert().ok_or(PsaError::NoCertData)?;

    Ok(CardRecord {
        cert_number: cert.cert_number.clone(),
        name: cert.subject.clone(),
        set: cert.brand.clone(),
        card_number: cert.card_number.clone(),
        spec_number: cert.spec_number.clone(),
        grade: cert.card_grade.clone(),
        grade_description: cert.grade_description.clone(),
        year: cert.year.clone(),
        brand: cert.brand.clone(),
        category: cert.category.clone(),
        variety: cert.variety.clone(),
        label_type: cert.label_type.clone(),
        total_population: cert.total_population,
        population_higher: cert.population_higher,
        is_dual_cert: cert.is_dual_cert,
        reverse_bar_code: cert.reverse_bar_code,
        image_url: cert.image_front.clone(),
        image_front: String::new(),
        image_back: String::new(),
    })
}

/// Merge an image payload into `card`.
///
/// List elements whose `IsFrontImage` flag is neither `true` nor `false`
/// are skipped.
pub fn attach_images(card: &mut CardRecord, payload: &ImagePayload) {
    match payload {
        ImagePayload::List(images) => {
            for image in images {
                match image.is_front_image {
                    Some(true) => {
                        card.image_front = image.image_url.clone();
                        card.image_url = card.image_front.clone();
                    }
                    Some(false) => card.image_back = image.image_url.clone(),
                    None => {}
                }
            }
        }
        ImagePayload::Single(pair) => {
            card.image_front = pair.image_front.clone();
            card.image_back = pair.image_back.clone();
            if !card.image_front.is_empty() {
                card.image_url = card.image_front.clone();
            }
        }
    }
    debug!(
        front = %card.image_front,
        back = %card.image_back,
        "attached images"
    );
}

/// Apply the outcome of an image lookup; unavailable images leave the
/// record as it was.
pub fn apply_image_lookup(card: &mut CardRecord, lookup: ImageLookup) {
    if let ImageLookup::Found(payload) = lookup {
        attach_images(card, &payload);
    }
}
