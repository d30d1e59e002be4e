//! Test RNG — deterministic `DeterministicRng` implementations for tests.

use railbaron_core::dice::{DIE_FACES, DiceRoll, Parity};
use railbaron_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min`. Every roll it drives comes out as
/// odd 2. Suitable for tests that do not depend on specific random values.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }
}

/// An RNG that returns values from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that need specific, repeatable random
/// outcomes (e.g., forcing a region pick to a known chart row).
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Create a `SequenceRng` whose draws reproduce the given rolls in
    /// order, three draws per roll (parity, first die, second die).
    ///
    /// # Panics
    ///
    /// Panics if a roll's sum cannot be made from two six-sided dice.
    #[must_use]
    pub fn for_rolls(rolls: impl IntoIterator<Item = DiceRoll>) -> Self {
        let mut values = Vec::new();
        for roll in rolls {
            assert!(
                (2..=2 * DIE_FACES).contains(&roll.sum),
                "sum {} is not producible by two dice",
                roll.sum
            );
            let first = (roll.sum - 1).min(DIE_FACES);
            let parity = match roll.parity {
                Parity::Odd => 0,
                Parity::Even => 1,
            };
            values.extend([parity, first, roll.sum - first]);
        }
        Self::new(values)
    }

    /// Number of values not yet drawn.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.values.len() - self.index
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}
