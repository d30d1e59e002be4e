//! Domain model for the destination charts.

pub mod records;
pub mod table;
