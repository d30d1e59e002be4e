//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::path::Path;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use railbaron_core::rng::DeterministicRng;
use railbaron_destinations::DestinationTable;
use railbaron_payoffs::PayoffTable;
use railbaron_test_support::{SequenceRng, fixtures};
use tower::ServiceExt;

use railbaron_api::build_app;
use railbaron_api::state::AppState;

/// Build the full app over the full-coverage charts and the small payoff
/// matrix, with no scripted rolls.
pub fn build_test_app() -> Router {
    build_test_app_with_rng(SequenceRng::new(vec![]))
}

/// Build the full app with a custom `SequenceRng` for tests that need
/// specific dice rolls.
pub fn build_test_app_with_rng(rng: SequenceRng) -> Router {
    let destinations =
        DestinationTable::from_csv_reader(fixtures::full_coverage_csv().as_bytes()).unwrap();
    let payoffs =
        PayoffTable::from_json_reader(fixtures::SMALL_PAYOFFS_JSON.as_bytes()).unwrap();
    build_app_from(destinations, payoffs, rng)
}

/// Build the full app from explicit tables.
pub fn build_app_from(
    destinations: DestinationTable,
    payoffs: PayoffTable,
    rng: SequenceRng,
) -> Router {
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = Arc::new(Mutex::new(rng));
    build_app(AppState::new(destinations, payoffs, rng), None)
}

/// Build the full app over the test tables, serving `static_dir` under
/// `/static` when given.
pub fn build_test_app_with_static(static_dir: Option<&Path>) -> Router {
    let destinations =
        DestinationTable::from_csv_reader(fixtures::full_coverage_csv().as_bytes()).unwrap();
    let payoffs =
        PayoffTable::from_json_reader(fixtures::SMALL_PAYOFFS_JSON.as_bytes()).unwrap();
    let rng: Arc<Mutex<dyn DeterministicRng + Send>> =
        Arc::new(Mutex::new(SequenceRng::new(vec![])));
    build_app(AppState::new(destinations, payoffs, rng), static_dir)
}

/// Send a GET request and return the status and raw body.
pub async fn get_bytes(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, body_bytes.to_vec())
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
