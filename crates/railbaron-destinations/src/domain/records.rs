//! Raw rows of the region/city chart, as read from CSV.

use serde::Deserialize;

/// One row of the region/city chart before parsing.
///
/// All fields are kept as text; [`DestinationTable::from_records`] trims
/// them and parses `parity` and `number`.
///
/// [`DestinationTable::from_records`]: crate::domain::table::DestinationTable::from_records
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegionRecord {
    /// The chart this row belongs to (`"area"` or a region name).
    pub region: String,
    /// `"odd"` or `"even"`.
    #[serde(rename = "odd/even", alias = "parity")]
    pub parity: String,
    /// The dice sum, as an integer string.
    pub number: String,
    /// The region or city this row resolves to.
    pub name: String,
}

impl RegionRecord {
    /// Creates a record from its fields.
    #[must_use]
    pub fn new(
        region: impl Into<String>,
        parity: impl Into<String>,
        number: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            parity: parity.into(),
            number: number.into(),
            name: name.into(),
        }
    }
}
