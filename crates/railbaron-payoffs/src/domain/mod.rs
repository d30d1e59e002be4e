//! Domain model for the payoff matrix.

pub mod table;
