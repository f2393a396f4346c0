//! Async client for the PSA public API.
//!
//! Two endpoints are used: the cert lookup, which is authoritative and
//! fails loudly, and the image lookup, which is best-effort and reports
//! failure as [`ImageLookup::Unavailable`] instead of an error.

use std::time::Duration;

use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use tracing::{debug, info, warn};

use crate::cert::CertNumber;
use crate::config;
use crate::error::{PsaError, Result};
use crate::models::{CardRecord, ImageLookup, ImagePayload, ImagesUnavailable, PsaCertResponse};
use crate::normalize;

// ---------------------------------------------------------------------------
// PsaClientBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`PsaClient`].
pub struct PsaClientBuilder {
    token: Option<String>,
    base_url: String,
    timeout: Duration,
}

impl Default for PsaClientBuilder {
    fn default() -> Self {
        Self {
            token: None,
            base_url: config::PSA_API_BASE.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
        }
    }
}

impl PsaClientBuilder {
    /// Set the bearer token. `None` or a blank string leaves the client
    /// unconfigured, in which case cert lookups fail fast.
    pub fn token<S: Into<String>>(mut self, token: Option<S>) -> Self {
        self.token = token.map(Into::into).filter(|t| !t.trim().is_empty());
        self
    }

    /// Override the API base URL. Defaults to the public PSA endpoint.
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Per-request timeout. Defaults to 10 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<PsaClient> {
        let http = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|e| PsaError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(PsaClient {
            http,
            base_url: self.base_url,
            token: self.token,
        })
    }
}

// ---------------------------------------------------------------------------
// PsaClient
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub struct PsaClient {
    http: Client,
    base_url: String,
    token: Option<String>,
}

impl PsaClient {
    pub fn builder() -> PsaClientBuilder {
        PsaClientBuilder::default()
    }

    /// Build a client from the application configuration.
    pub fn from_config(config: &config::AppConfig) -> Result<Self> {
        Self::builder()
            .token(config.auth_token.clone())
            .base_url(config.api_base.clone())
            .build()
    }

    /// Whether a bearer token is available.
    pub fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the cert record for `raw`.
    ///
    /// The cert number must contain at least eight digits once separators
    /// are stripped. A 200 response without a populated `PSACert.CertNumber`
    /// is reported as [`PsaError::NoCertData`].
    pub async fn lookup_cert(&self, raw: &str) -> Result<PsaCertResponse> {
        let token = self
            .token
            .as_deref()
            .ok_or(PsaError::UpstreamNotConfigured)?;
        let cert = CertNumber::parse(raw)?;
        let url = format!("{}/cert/GetByCertNumber/{}", self.base_url, cert);
        info!(%cert, "looking up PSA cert");

        let resp = self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("bearer {token}"))
            .send()
            .await
            .map_err(|e| PsaError::UpstreamTransport(e.to_string()))?;

        let status = resp.status();
        if status != StatusCode::OK {
            warn!(%cert, status = status.as_u16(), "PSA cert lookup failed");
            return Err(PsaError::UpstreamHttp {
                status: status.as_u16(),
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| PsaError::UpstreamTransport(e.to_string()))?;
        let body: PsaCertResponse = serde_json::from_slice(&bytes)?;
        debug!(%cert, ?body, "PSA cert response");

        if body.cert().is_none() {
            warn!(%cert, "PSA response carried no cert data");
            return Err(PsaError::NoCertData);
        }
        Ok(body)
    }

    /// Fetch the front/back images for `raw`. Never fails.
    pub async fn lookup_images(&self, raw: &str) -> ImageLookup {
        let Some(token) = self.token.as_deref() else {
            return ImageLookup::Unavailable(ImagesUnavailable::NotConfigured);
        };
        let cert = CertNumber::lenient(raw);
        let url = format!("{}/cert/GetImagesByCertNumber/{}", self.base_url, cert);
        debug!(%cert, "looking up PSA cert images");

        let resp = match self
            .http
            .get(&url)
            .header(AUTHORIZATION, format!("bearer {token}"))
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!(%cert, error = %e, "image lookup failed");
                return ImageLookup::Unavailable(ImagesUnavailable::Transport(e.to_string()));
            }
        };

        match resp.status() {
            StatusCode::OK => {}
            StatusCode::TOO_MANY_REQUESTS => {
                warn!(%cert, "image lookup rate limited");
                return ImageLookup::Unavailable(ImagesUnavailable::RateLimited);
            }
            other => {
                warn!(%cert, status = other.as_u16(), "image lookup returned error status");
                return ImageLookup::Unavailable(ImagesUnavailable::Status(other.as_u16()));
            }
        }

        match resp.json::<ImagePayload>().await {
            Ok(payload) => ImageLookup::Found(payload),
            Err(e) => {
                warn!(%cert, error = %e, "image payload unreadable");
                ImageLookup::Unavailable(ImagesUnavailable::Transport(e.to_string()))
            }
        }
    }

    /// Cert lookup, normalization and image merge in one call.
    pub async fn lookup_card(&self, raw: &str) -> Result<CardRecord> {
        let response = self.lookup_cert(raw).await?;
        let mut card = normalize::normalize_cert(&response)?;
        let images = self.lookup_images(raw).await;
        normalize::apply_image_lookup(&mut card, images);
        Ok(card)
    }
}
