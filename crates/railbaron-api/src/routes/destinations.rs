//! Routes for the destination charts.

use axum::extract::{Path, State};
use axum::{Json, Router, routing::get};
use tracing::{info, instrument};
use uuid::Uuid;

use railbaron_destinations::application::query_handlers::{
    self, CityPickView, RegionListView, RegionPickView,
};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /regions
async fn list_regions(State(state): State<AppState>) -> Json<RegionListView> {
    Json(query_handlers::list_regions(&state.destinations))
}

/// GET /region
#[instrument(skip(state))]
async fn pick_region(State(state): State<AppState>) -> Result<Json<RegionPickView>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling pick_region query");

    let view = query_handlers::pick_region(&state.destinations, &state.rng)?;

    Ok(Json(view))
}

/// GET /{region}/city
#[instrument(skip(state))]
async fn pick_city(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<CityPickView>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling pick_city query");

    let view = query_handlers::pick_city(&region, &state.destinations, &state.rng)?;

    Ok(Json(view))
}

/// Returns the router for the destination charts.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/regions", get(list_regions))
        .route("/region", get(pick_region))
        .route("/{region}/city", get(pick_city))
}
