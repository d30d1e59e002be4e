//! The source-by-destination payoff matrix.

use std::collections::BTreeMap;
use std::io::Read;

use railbaron_core::error::{LookupError, ParseError};

/// Source city, then destination city, then payoff.
pub type PayoffMatrix = BTreeMap<String, BTreeMap<String, i64>>;

/// Payoffs between city pairs. Read-only after construction.
///
/// Amounts are whole dollars held as `i64`. Payoff data is assumed to be
/// integral: a fractional amount in the JSON is rejected as a
/// `ParseError::Json` rather than rounded.
#[derive(Debug, Clone, Default)]
pub struct PayoffTable {
    payoffs: PayoffMatrix,
}

impl PayoffTable {
    /// Wraps an already structured matrix as-is.
    #[must_use]
    pub fn from_structured(payoffs: PayoffMatrix) -> Self {
        Self { payoffs }
    }

    /// Reads a JSON object of objects of integers.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Json` if the input cannot be read or does not
    /// have that shape.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
        let payoffs: PayoffMatrix = serde_json::from_reader(reader)?;
        Ok(Self::from_structured(payoffs))
    }

    /// All source cities, ascending.
    #[must_use]
    pub fn cities(&self) -> Vec<String> {
        self.payoffs.keys().cloned().collect()
    }

    /// The payoff for a trip from `source` to `destination`.
    ///
    /// Nothing is inferred: a reverse entry or a same-city trip only has a
    /// payoff if the matrix lists one.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::UnknownSourceCity` if `source` is not a row, and
    /// `LookupError::UnknownDestinationCity` if `destination` is not in that
    /// row.
    pub fn payoff(&self, source: &str, destination: &str) -> Result<i64, LookupError> {
        let row = self
            .payoffs
            .get(source)
            .ok_or_else(|| LookupError::UnknownSourceCity(source.to_owned()))?;
        row.get(destination)
            .copied()
            .ok_or_else(|| LookupError::UnknownDestinationCity {
                source_city: source.to_owned(),
                destination_city: destination.to_owned(),
            })
    }
}
