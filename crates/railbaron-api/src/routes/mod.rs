//! Route modules, one per table plus health.

pub mod destinations;
pub mod health;
pub mod payoffs;
