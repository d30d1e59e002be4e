//! Startup loading of the data files.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use railbaron_destinations::DestinationTable;
use railbaron_payoffs::PayoffTable;
use tracing::{info, warn};

use crate::error::AppError;

fn open(path: &Path) -> Result<BufReader<File>, AppError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| AppError::DataFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Loads the region/city charts and warns about every roll they leave
/// uncovered. A request that rolls into a hole fails with a server error.
///
/// # Errors
///
/// Returns `AppError::DataFile` if the file cannot be opened and
/// `AppError::Data` if it is malformed.
pub fn load_destinations(path: &Path) -> Result<DestinationTable, AppError> {
    let table = DestinationTable::from_csv_reader(open(path)?).map_err(|source| {
        AppError::Data {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let gaps = table.coverage_gaps();
    for gap in &gaps {
        warn!(table = %gap.table, roll = %gap.roll, "destination chart has no entry for roll");
    }
    info!(
        path = %path.display(),
        regions = table.region_names().len(),
        gaps = gaps.len(),
        "loaded destination charts"
    );

    Ok(table)
}

/// Loads the payoff matrix.
///
/// # Errors
///
/// Returns `AppError::DataFile` if the file cannot be opened and
/// `AppError::Data` if it is malformed.
pub fn load_payoffs(path: &Path) -> Result<PayoffTable, AppError> {
    let table = PayoffTable::from_json_reader(open(path)?).map_err(|source| AppError::Data {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), cities = table.cities().len(), "loaded payoff matrix");
    Ok(table)
}
