//! Shared test mocks and fixtures for the Rail Baron helper.

pub mod fixtures;
mod rng;

pub use rng::{MockRng, SequenceRng};
