//! The two-dice roll used as the lookup key for destination tables.

use std::fmt;

use crate::rng::DeterministicRng;

/// Number of faces on each die.
pub const DIE_FACES: u32 = 6;

/// Smallest producible sum of two dice.
pub const MIN_SUM: u32 = 2;

/// Largest producible sum of two dice.
pub const MAX_SUM: u32 = 2 * DIE_FACES;

/// The odd/even flag rolled alongside the two dice.
///
/// The flag is drawn independently of the dice; it does not describe the
/// parity of the sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Parity {
    /// The "odd" column of a destination chart.
    Odd,
    /// The "even" column of a destination chart.
    Even,
}

impl Parity {
    /// Parses the textual form used in data files (`"odd"` or `"even"`),
    /// ignoring surrounding whitespace.
    ///
    /// Matching is case-insensitive, a widening over exact lowercase keys:
    /// rows labelled `"Odd"` or `"EVEN"` load and are reachable.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.eq_ignore_ascii_case("odd") {
            Some(Self::Odd)
        } else if label.eq_ignore_ascii_case("even") {
            Some(Self::Even)
        } else {
            None
        }
    }

    /// Returns the lowercase label of this parity.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Odd => "odd",
            Self::Even => "even",
        }
    }
}

impl fmt::Display for Parity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A (parity, sum) pair keying one row of a destination chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiceRoll {
    /// The independently rolled odd/even flag.
    pub parity: Parity,
    /// The total of two six-sided dice.
    pub sum: u32,
}

impl DiceRoll {
    /// Creates a roll from its parts.
    #[must_use]
    pub const fn new(parity: Parity, sum: u32) -> Self {
        Self { parity, sum }
    }

    /// Every outcome the dice model can produce: both parities crossed with
    /// sums 2 through 12, odd column first.
    pub fn all() -> impl Iterator<Item = DiceRoll> {
        [Parity::Odd, Parity::Even]
            .into_iter()
            .flat_map(|parity| (MIN_SUM..=MAX_SUM).map(move |sum| DiceRoll::new(parity, sum)))
    }
}

impl fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.parity, self.sum)
    }
}

/// Rolls the parity flag and two dice.
///
/// Draw order is fixed: parity first (`0` is odd, `1` is even), then the
/// first die, then the second. Scripted RNGs in tests rely on this order.
pub fn roll_dice(rng: &mut dyn DeterministicRng) -> DiceRoll {
    let parity = if rng.next_u32_range(0, 1) == 0 {
        Parity::Odd
    } else {
        Parity::Even
    };
    let first = rng.next_u32_range(1, DIE_FACES);
    let second = rng.next_u32_range(1, DIE_FACES);
    DiceRoll::new(parity, first + second)
}
