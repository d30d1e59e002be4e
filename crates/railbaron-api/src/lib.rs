//! Rail Baron helper — HTTP API.
//!
//! Loads the destination charts and payoff matrix once at startup and serves
//! picks and lookups over JSON.

use std::path::Path;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod tables;

/// Builds the application router with every route, layer and, when
/// `static_dir` is given, the `/static` file service.
pub fn build_app(app_state: state::AppState, static_dir: Option<&Path>) -> Router {
    let mut app = Router::new()
        .merge(routes::health::router())
        .nest("/api/v1/destinations", routes::destinations::router())
        .nest("/api/v1/payoffs", routes::payoffs::router());

    if let Some(dir) = static_dir {
        app = app.nest_service("/static", ServeDir::new(dir));
    }

    app.layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}
