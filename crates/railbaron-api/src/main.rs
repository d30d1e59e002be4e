//! Rail Baron helper API server entry point.

use std::sync::{Arc, Mutex};

use railbaron_api::config::Config;
use railbaron_api::error::AppError;
use railbaron_api::state::AppState;
use railbaron_api::{build_app, tables};
use railbaron_core::rng::{DeterministicRng, StdRandom};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // Initialize tracing subscriber.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .init();

    tracing::info!("Starting Rail Baron helper API server");

    let config = Config::from_env()?;

    // Load both tables before binding; a bad data file stops startup.
    let destinations = tables::load_destinations(&config.regions_path)?;
    let payoffs = tables::load_payoffs(&config.payoffs_path)?;

    let rng: Arc<Mutex<dyn DeterministicRng + Send>> = match config.rng_seed {
        Some(seed) => {
            tracing::info!(seed, "using seeded RNG");
            Arc::new(Mutex::new(StdRandom::seeded(seed)))
        }
        None => Arc::new(Mutex::new(StdRandom::from_entropy())),
    };

    let app_state = AppState::new(destinations, payoffs, rng);
    let app = build_app(app_state, config.static_dir.as_deref());

    let addr = config.socket_addr()?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
