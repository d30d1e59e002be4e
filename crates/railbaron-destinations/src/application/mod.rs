//! Application-level handlers over the destination charts.

pub mod query_handlers;
