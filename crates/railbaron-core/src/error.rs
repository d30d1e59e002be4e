//! Domain error types.

use thiserror::Error;

use crate::dice::DiceRoll;

/// A key was not found in one of the lookup tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// A rolled outcome has no entry in the table. The data file does not
    /// cover every producible roll.
    #[error("table `{table}` has no entry for roll {roll}")]
    MissingRoll {
        /// The table that was consulted.
        table: String,
        /// The roll that has no entry.
        roll: DiceRoll,
    },

    /// No city table exists for the region.
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// The source city is not a row of the payoff matrix.
    #[error("unknown source city: {0}")]
    UnknownSourceCity(String),

    /// The destination city is not a column of the source city's row.
    #[error("no payoff from {source_city} to {destination_city}")]
    UnknownDestinationCity {
        /// The source city that was found.
        source_city: String,
        /// The destination city that was missing.
        destination_city: String,
    },
}

/// Malformed input while building a table.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The region CSV could not be read or a record is missing a field.
    #[error("malformed region data: {0}")]
    Csv(#[from] csv::Error),

    /// The payoff JSON could not be read or has the wrong shape.
    #[error("malformed payoff data: {0}")]
    Json(#[from] serde_json::Error),

    /// A record's parity is neither "odd" nor "even".
    #[error("record {record}: invalid parity {value:?}")]
    InvalidParity {
        /// One-based record index, excluding the header.
        record: usize,
        /// The offending text.
        value: String,
    },

    /// A record's number is not an integer.
    #[error("record {record}: invalid number {value:?}")]
    InvalidNumber {
        /// One-based record index, excluding the header.
        record: usize,
        /// The offending text.
        value: String,
    },
}

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// A lookup failed.
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// An infrastructure error, such as a poisoned RNG lock.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
