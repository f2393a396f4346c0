use serde::{Deserialize, Serialize};

use super::lenient;

// ---------------------------------------------------------------------------
// PsaCertResponse — body of GET /cert/GetByCertNumber/{cert}
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PsaCertResponse {
    #[serde(rename = "PSACert", default)]
    pub psa_cert: Option<PsaCert>,
}

impl PsaCertResponse {
    /// The cert object, if present and carrying a certificate number.
    pub fn cert(&self) -> Option<&PsaCert> {
        self.psa_cert
            .as_ref()
            .filter(|c| !c.cert_number.trim().is_empty())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PsaCert {
    #[serde(deserialize_with = "lenient::string")]
    pub cert_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub subject: String,
    #[serde(deserialize_with = "lenient::string")]
    pub brand: String,
    #[serde(deserialize_with = "lenient::string")]
    pub card_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub spec_number: String,
    #[serde(deserialize_with = "lenient::string")]
    pub card_grade: String,
    #[serde(deserialize_with = "lenient::string")]
    pub grade_description: String,
    #[serde(deserialize_with = "lenient::string")]
    pub year: String,
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
    pub image_front: String,
}

// ---------------------------------------------------------------------------
// ImagePayload — body of GET /cert/GetImagesByCertNumber/{cert}
// ---------------------------------------------------------------------------

/// The image endpoint answers with either one object per image or, on
/// older certs, a single object holding both URLs.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ImagePayload {
    List(#[serde(deserialize_with = "lenient::elements")] Vec<PsaImage>),
    Single(PsaImagePair),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PsaImage {
    #[serde(rename = "IsFrontImage", deserialize_with = "lenient::flag")]
    pub is_front_image: Option<bool>,
    #[serde(rename = "ImageURL", deserialize_with = "lenient::string")]
    pub image_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct PsaImagePair {
    #[serde(deserialize_with = "lenient::string")]
    pub image_front: String,
    #[serde(deserialize_with = "lenient::string")]
    pub image_back: String,
}

/// Outcome of the best-effort image lookup.
#[derive(Debug, Clone)]
pub enum ImageLookup {
    Found(ImagePayload),
    Unavailable(ImagesUnavailable),
}

impl ImageLookup {
    pub fn is_found(&self) -> bool {
        matches!(self, ImageLookup::Found(_))
    }
}

/// Why no image payload could be obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagesUnavailable {
    NotConfigured,
    RateLimited,
    Status(u16),
    Transport(String),
}
