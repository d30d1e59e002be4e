//! Routes for the payoff matrix.

use axum::extract::{Query, State};
use axum::{Json, Router, routing::get};
use serde::Deserialize;
use tracing::{info, instrument};
use uuid::Uuid;

use railbaron_payoffs::application::query_handlers::{self, CityListView, PayoffView};

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for GET /lookup.
#[derive(Debug, Deserialize)]
pub struct PayoffQuery {
    /// Where the trip starts.
    pub source_city: String,
    /// Where the trip ends.
    pub destination_city: String,
}

/// GET /cities
async fn list_cities(State(state): State<AppState>) -> Json<CityListView> {
    Json(query_handlers::list_cities(&state.payoffs))
}

/// GET /lookup?source_city=..&destination_city=..
#[instrument(
    skip(state, query),
    fields(source_city = %query.source_city, destination_city = %query.destination_city)
)]
async fn lookup_payoff(
    State(state): State<AppState>,
    Query(query): Query<PayoffQuery>,
) -> Result<Json<PayoffView>, ApiError> {
    let correlation_id = Uuid::new_v4();
    info!(%correlation_id, "handling lookup_payoff query");

    let view =
        query_handlers::lookup_payoff(&query.source_city, &query.destination_city, &state.payoffs)?;

    Ok(Json(view))
}

/// Returns the router for the payoff matrix.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/cities", get(list_cities))
        .route("/lookup", get(lookup_payoff))
}
