//! Shared application state.

use std::sync::{Arc, Mutex};

use railbaron_core::rng::DeterministicRng;
use railbaron_destinations::DestinationTable;
use railbaron_payoffs::PayoffTable;

/// Application state shared across all request handlers.
///
/// The tables are read-only and shared without locking; only the RNG sits
/// behind a mutex.
#[derive(Clone)]
pub struct AppState {
    /// Region and city charts.
    pub destinations: Arc<DestinationTable>,
    /// City-to-city payoff matrix.
    pub payoffs: Arc<PayoffTable>,
    /// Random number generator used for dice rolls.
    pub rng: Arc<Mutex<dyn DeterministicRng + Send>>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        destinations: DestinationTable,
        payoffs: PayoffTable,
        rng: Arc<Mutex<dyn DeterministicRng + Send>>,
    ) -> Self {
        Self {
            destinations: Arc::new(destinations),
            payoffs: Arc::new(payoffs),
            rng,
        }
    }
}
