//! Shared test fixtures for the PSA collection integration tests.
//!
//! Provides `spawn_fake_psa()`, an axum server on an ephemeral localhost
//! port that answers the two PSA endpoints with canned responses and records
//! every request it sees, and `spawn_app()`, which serves the real router.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use psa_collection::server::{self, AppState};
use psa_collection::{MemoryStore, PsaClient};
use tokio::net::TcpListener;

pub const TOKEN: &str = "test-token";

/// A canned upstream response.
#[derive(Clone)]
pub struct Canned {
    pub status: StatusCode,
    pub body: String,
    pub delay: Option<Duration>,
}

impl Canned {
    pub fn json(status: StatusCode, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn ok(body: serde_json::Value) -> Self {
        Self::json(StatusCode::OK, body)
    }

    pub fn status(status: StatusCode) -> Self {
        Self::json(status, serde_json::json!({ "Message": "error" }))
    }

    pub fn raw(status: StatusCode, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

/// A request observed by the fake upstream.
#[derive(Debug, Clone)]
pub struct Recorded {
    pub path: String,
    pub authorization: Option<String>,
}

struct FakeState {
    cert: Canned,
    images: Canned,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

pub struct FakePsa {
    pub base_url: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl FakePsa {
    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    /// A client pointed at this fake, carrying [`TOKEN`].
    pub fn client(&self) -> PsaClient {
        PsaClient::builder()
            .token(Some(TOKEN))
            .base_url(self.base_url.clone())
            .build()
            .unwrap()
    }
}

pub async fn spawn_fake_psa(cert: Canned, images: Canned) -> FakePsa {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = Arc::new(FakeState {
        cert,
        images,
        requests: requests.clone(),
    });

    let app = Router::new()
        .route("/cert/GetByCertNumber/{cert}", get(cert_handler))
        .route("/cert/GetImagesByCertNumber/{cert}", get(images_handler))
        .with_state(state);

    let base_url = serve(app).await;
    FakePsa { base_url, requests }
}

async fn cert_handler(
    State(state): State<Arc<FakeState>>,
    Path(cert): Path<String>,
    headers: HeaderMap,
) -> Response {
    record(&state, format!("/cert/GetByCertNumber/{cert}"), &headers);
    respond(&state.cert).await
}

async fn images_handler(
    State(state): State<Arc<FakeState>>,
    Path(cert): Path<String>,
    headers: HeaderMap,
) -> Response {
    record(&state, format!("/cert/GetImagesByCertNumber/{cert}"), &headers);
    respond(&state.images).await
}

fn record(state: &FakeState, path: String, headers: &HeaderMap) {
    let authorization = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    state
        .requests
        .lock()
        .unwrap()
        .push(Recorded { path, authorization });
}

async fn respond(canned: &Canned) -> Response {
    if let Some(delay) = canned.delay {
        tokio::time::sleep(delay).await;
    }
    (
        canned.status,
        [(CONTENT_TYPE, "application/json")],
        canned.body.clone(),
    )
        .into_response()
}

/// Serve the real application router with a fresh in-memory store.
///
/// Returns the base URL and the `TempDir` holding `index.html`; keep the
/// `TempDir` alive for the duration of the test.
pub async fn spawn_app(client: PsaClient) -> (String, tempfile::TempDir) {
    let static_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        static_dir.path().join("index.html"),
        "<html><body>PSA Collection</body></html>",
    )
    .unwrap();
    std::fs::write(static_dir.path().join("app.js"), "console.log('hi');").unwrap();

    let state = Arc::new(AppState::new(
        client,
        Arc::new(MemoryStore::new()),
        static_dir.path(),
    ));
    let base_url = serve(server::router(state)).await;
    (base_url, static_dir)
}

/// A client with no token.
pub fn unconfigured_client() -> PsaClient {
    PsaClient::builder()
        .token(None::<String>)
        .base_url("http://127.0.0.1:9")
        .build()
        .unwrap()
}

/// A base URL nothing is listening on.
pub async fn dead_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

// ---------------------------------------------------------------------------
// Sample payloads
// ---------------------------------------------------------------------------

pub fn sample_cert() -> serde_json::Value {
    serde_json::json!({
        "PSACert": {
            "CertNumber": "12345678",
            "SpecID": 12345,
            "SpecNumber": "PKM1999BS004",
            "LabelType": "LighthouseLabel",
            "ReverseBarCode": false,
            "Year": "1999",
            "Brand": "POKEMON GAME",
            "Category": "TCG Cards",
            "CardNumber": "4",
            "Subject": "CHARIZARD-HOLO",
            "Variety": "1ST EDITION",
            "IsPSADNA": false,
            "IsDualCert": false,
            "GradeDescription": "GEM MT 10",
            "CardGrade": "GEM MT 10",
            "TotalPopulation": 121,
            "TotalPopulationWithQualifier": 0,
            "PopulationHigher": 0
        }
    })
}

pub fn sample_images() -> serde_json::Value {
    serde_json::json!([
        { "IsFrontImage": true, "ImageURL": "https://img.example/front.jpg" },
        { "IsFrontImage": false, "ImageURL": "https://img.example/back.jpg" }
    ])
}
