//! Small synthetic data sets in the same formats as the shipped data files.

use std::fmt::Write;

use railbaron_core::dice::{DiceRoll, Parity};

/// Header row of the region/city CSV.
pub const REGION_CSV_HEADER: &str = "region,odd/even,number,name";

/// One area row and one city row, both keyed by odd 7.
pub const SINGLE_ROLL_CSV: &str = "region,odd/even,number,name\n\
area,odd,7,East\n\
East,odd,7,Boston\n";

/// A payoff matrix with a single one-way entry.
pub const ONE_WAY_PAYOFFS_JSON: &str = r#"{"Boston": {"Chicago": 800}}"#;

/// A three-city payoff matrix. Not symmetric, and only Boston has a
/// self-payoff.
pub const SMALL_PAYOFFS_JSON: &str = r#"{
    "Chicago": {"Boston": 1050, "Atlanta": 700},
    "Boston": {"Chicago": 1000, "Atlanta": 1100, "Boston": 0},
    "Atlanta": {"Boston": 1100, "Chicago": 650}
}"#;

/// City name the full-coverage fixture assigns to `roll` in `region`.
#[must_use]
pub fn coverage_city(region: &str, roll: DiceRoll) -> String {
    let base = if region == "East" { "Boston" } else { "Seattle" };
    format!("{base} {roll}")
}

/// Region/city CSV covering all 22 rolls in every table. The area table
/// sends odd rolls East and even rolls West; city names come from
/// [`coverage_city`].
#[must_use]
pub fn full_coverage_csv() -> String {
    let mut csv = String::from(REGION_CSV_HEADER);
    csv.push('\n');
    for roll in DiceRoll::all() {
        let region = match roll.parity {
            Parity::Odd => "East",
            Parity::Even => "West",
        };
        let _ = writeln!(csv, "area,{},{},{region}", roll.parity, roll.sum);
    }
    for region in ["East", "West"] {
        for roll in DiceRoll::all() {
            let _ = writeln!(
                csv,
                "{region},{},{},{}",
                roll.parity,
                roll.sum,
                coverage_city(region, roll)
            );
        }
    }
    csv
}
