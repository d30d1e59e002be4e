//! Application-level handlers over the payoff matrix.

pub mod query_handlers;
