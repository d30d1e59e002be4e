//! Health check endpoint.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `"ok"`, or `"degraded"` when the destination charts have holes.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Number of regions a city can be picked in.
    pub regions: usize,
    /// Number of cities in the payoff matrix.
    pub cities: usize,
    /// Number of producible rolls with no chart entry.
    pub coverage_gaps: usize,
}

/// GET /health
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let coverage_gaps = state.destinations.coverage_gaps().len();
    let status = if coverage_gaps == 0 { "ok" } else { "degraded" };
    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        regions: state.destinations.region_names().len(),
        cities: state.payoffs.cities().len(),
        coverage_gaps,
    })
}

/// Returns the health check router.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
