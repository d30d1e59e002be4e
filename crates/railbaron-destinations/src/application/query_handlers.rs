//! Query handlers for the destination charts.
//!
//! These lock the shared RNG around a single synchronous pick and return
//! read-only view DTOs.

use std::sync::Mutex;

use railbaron_core::error::DomainError;
use railbaron_core::rng::DeterministicRng;
use serde::Serialize;

use crate::domain::table::DestinationTable;

/// Result of a region pick.
#[derive(Debug, Serialize)]
pub struct RegionPickView {
    /// The picked region.
    pub region: String,
}

/// Result of a city pick.
#[derive(Debug, Serialize)]
pub struct CityPickView {
    /// The region the city was picked in.
    pub region: String,
    /// The picked city.
    pub city: String,
}

/// The regions a city can be picked in.
#[derive(Debug, Serialize)]
pub struct RegionListView {
    /// Region names, ascending.
    pub regions: Vec<String>,
}

/// Picks a region with one roll of the dice.
///
/// # Errors
///
/// Returns `DomainError::Lookup` if the area chart lacks the rolled entry.
/// Returns `DomainError::Infrastructure` if the RNG mutex is poisoned.
pub fn pick_region(
    table: &DestinationTable,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<RegionPickView, DomainError> {
    let region = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        table.pick_region(&mut *rng_guard)?
    };
    Ok(RegionPickView { region })
}

/// Picks a city in `region` with one roll of the dice.
///
/// # Errors
///
/// Returns `DomainError::Lookup` if the region is unknown or its chart
/// lacks the rolled entry.
/// Returns `DomainError::Infrastructure` if the RNG mutex is poisoned.
pub fn pick_city(
    region: &str,
    table: &DestinationTable,
    rng: &Mutex<dyn DeterministicRng + Send>,
) -> Result<CityPickView, DomainError> {
    let city = {
        let mut rng_guard = rng
            .lock()
            .map_err(|e| DomainError::Infrastructure(format!("RNG mutex poisoned: {e}")))?;
        table.pick_city(region, &mut *rng_guard)?
    };
    Ok(CityPickView {
        region: region.to_owned(),
        city,
    })
}

/// Lists the regions of the loaded charts.
#[must_use]
pub fn list_regions(table: &DestinationTable) -> RegionListView {
    RegionListView {
        regions: table.region_names(),
    }
}
