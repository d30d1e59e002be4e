//! Query handlers for the payoff matrix.

use railbaron_core::error::DomainError;
use serde::Serialize;

use crate::domain::table::PayoffTable;

/// Read-only view of one payoff lookup.
#[derive(Debug, Serialize)]
pub struct PayoffView {
    /// Where the trip starts.
    pub source_city: String,
    /// Where the trip ends.
    pub destination_city: String,
    /// The payoff for the trip.
    pub payoff: i64,
}

/// Read-only view of the known cities.
#[derive(Debug, Serialize)]
pub struct CityListView {
    /// City names, ascending.
    pub cities: Vec<String>,
}

/// Looks up the payoff for a trip.
///
/// # Errors
///
/// Returns `DomainError::Lookup` if either city is missing from the matrix.
pub fn lookup_payoff(
    source_city: &str,
    destination_city: &str,
    table: &PayoffTable,
) -> Result<PayoffView, DomainError> {
    let payoff = table.payoff(source_city, destination_city)?;
    Ok(PayoffView {
        source_city: source_city.to_owned(),
        destination_city: destination_city.to_owned(),
        payoff,
    })
}

/// Lists the source cities of the matrix.
#[must_use]
pub fn list_cities(table: &PayoffTable) -> CityListView {
    CityListView {
        cities: table.cities(),
    }
}
