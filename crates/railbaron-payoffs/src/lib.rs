//! Rail Baron — payoff matrix.
//!
//! Responsible for the payoff owed for a trip between two cities and for
//! listing the cities the matrix knows.

pub mod application;
pub mod domain;

pub use domain::table::{PayoffMatrix, PayoffTable};
