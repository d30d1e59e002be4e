//! Rail Baron Core — shared domain abstractions.
//!
//! This crate defines the dice model, the random number abstraction and the
//! error types that the destination and payoff tables depend on. It contains
//! no infrastructure code.

pub mod dice;
pub mod error;
pub mod rng;
