//! Rail Baron — destination tables.
//!
//! Responsible for turning a dice roll into a destination: first a region
//! from the area chart, then a city from that region's chart.

pub mod application;
pub mod domain;

pub use domain::table::{AREA_TABLE, CoverageGap, DestinationTable};
