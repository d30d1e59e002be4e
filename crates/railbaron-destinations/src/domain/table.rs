//! The two-level destination chart: table name, then dice roll, then name.

use std::collections::BTreeMap;
use std::io::Read;

use railbaron_core::dice::{DiceRoll, Parity, roll_dice};
use railbaron_core::error::{LookupError, ParseError};
use railbaron_core::rng::DeterministicRng;
use tracing::info;

use super::records::RegionRecord;

/// Name of the table used to pick a region. Every other table picks a city.
pub const AREA_TABLE: &str = "area";

/// A producible roll with no entry in one of the tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageGap {
    /// The table with the hole.
    pub table: String,
    /// The roll that has no entry.
    pub roll: DiceRoll,
}

/// Region and city charts keyed by dice roll.
///
/// Built once from records and read-only afterwards; lookups never insert.
#[derive(Debug, Clone, Default)]
pub struct DestinationTable {
    tables: BTreeMap<String, BTreeMap<DiceRoll, String>>,
}

impl DestinationTable {
    /// Builds the charts from ordered records.
    ///
    /// Fields are trimmed. A later record with the same table and roll
    /// replaces an earlier one.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidParity` or `ParseError::InvalidNumber` for
    /// the first record whose parity or number does not parse.
    pub fn from_records<I>(records: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = RegionRecord>,
    {
        let mut tables: BTreeMap<String, BTreeMap<DiceRoll, String>> = BTreeMap::new();

        for (index, record) in records.into_iter().enumerate() {
            let record_number = index + 1;
            let parity =
                Parity::from_label(&record.parity).ok_or_else(|| ParseError::InvalidParity {
                    record: record_number,
                    value: record.parity.clone(),
                })?;
            let sum: u32 =
                record
                    .number
                    .trim()
                    .parse()
                    .map_err(|_| ParseError::InvalidNumber {
                        record: record_number,
                        value: record.number.clone(),
                    })?;

            tables
                .entry(record.region.trim().to_owned())
                .or_default()
                .insert(DiceRoll::new(parity, sum), record.name.trim().to_owned());
        }

        Ok(Self { tables })
    }

    /// Reads the charts from CSV with a `region,odd/even,number,name` header.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::Csv` if the input cannot be read or a row lacks
    /// a column, and the errors of [`Self::from_records`] otherwise.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let records = csv_reader
            .deserialize::<RegionRecord>()
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_records(records)
    }

    /// Rolls the dice and returns the region the area chart maps it to.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::MissingRoll` if the area chart has no entry for
    /// the roll, including when there is no area chart at all.
    pub fn pick_region(&self, rng: &mut dyn DeterministicRng) -> Result<String, LookupError> {
        let roll = roll_dice(rng);
        let region = self.lookup(AREA_TABLE, roll)?;
        info!(%roll, region, "picked region");
        Ok(region.to_owned())
    }

    /// Rolls the dice and returns the city `region`'s chart maps it to.
    ///
    /// Any loaded chart can be named, the area chart included, in which case
    /// the result is a region name.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::UnknownRegion` if there is no chart for `region`,
    /// checked before rolling.
    /// Returns `LookupError::MissingRoll` if the chart has no entry for the
    /// roll.
    pub fn pick_city(
        &self,
        region: &str,
        rng: &mut dyn DeterministicRng,
    ) -> Result<String, LookupError> {
        if !self.tables.contains_key(region) {
            return Err(LookupError::UnknownRegion(region.to_owned()));
        }
        let roll = roll_dice(rng);
        let city = self.lookup(region, roll)?;
        info!(%roll, region, city, "picked city");
        Ok(city.to_owned())
    }

    /// Names of the regions a city can be picked in, ascending.
    #[must_use]
    pub fn region_names(&self) -> Vec<String> {
        self.tables
            .keys()
            .filter(|name| name.as_str() != AREA_TABLE)
            .cloned()
            .collect()
    }

    /// Every producible roll with no entry, per table, in table order then
    /// roll order. Empty for a complete data set.
    #[must_use]
    pub fn coverage_gaps(&self) -> Vec<CoverageGap> {
        let mut gaps = Vec::new();
        if !self.tables.contains_key(AREA_TABLE) {
            gaps.extend(DiceRoll::all().map(|roll| CoverageGap {
                table: AREA_TABLE.to_owned(),
                roll,
            }));
        }
        for (table, entries) in &self.tables {
            gaps.extend(
                DiceRoll::all()
                    .filter(|roll| !entries.contains_key(roll))
                    .map(|roll| CoverageGap {
                        table: table.clone(),
                        roll,
                    }),
            );
        }
        gaps
    }

    fn lookup(&self, table: &str, roll: DiceRoll) -> Result<&str, LookupError> {
        self.tables
            .get(table)
            .and_then(|entries| entries.get(&roll))
            .map(String::as_str)
            .ok_or_else(|| LookupError::MissingRoll {
                table: table.to_owned(),
                roll,
            })
    }
}

#[cfg(test)]
mod tests {
    use railbaron_test_support::{MockRng, SequenceRng, fixtures};

    use super::*;

    fn single_roll_table() -> DestinationTable {
        DestinationTable::from_csv_reader(fixtures::SINGLE_ROLL_CSV.as_bytes()).unwrap()
    }

    fn full_table() -> DestinationTable {
        DestinationTable::from_csv_reader(fixtures::full_coverage_csv().as_bytes()).unwrap()
    }

    fn odd_seven() -> DiceRoll {
        DiceRoll::new(Parity::Odd, 7)
    }

    #[test]
    fn test_forced_rolls_pick_region_then_city() {
        // Arrange
        let table = single_roll_table();
        let mut rng = SequenceRng::for_rolls([odd_seven(), odd_seven()]);

        // Act
        let region = table.pick_region(&mut rng).unwrap();
        let city = table.pick_city(&region, &mut rng).unwrap();

        // Assert
        assert_eq!(region, "East");
        assert_eq!(city, "Boston");
        assert_eq!(rng.remaining(), 0);
    }

    #[test]
    fn test_every_producible_roll_resolves_with_full_coverage() {
        let table = full_table();
        assert!(table.coverage_gaps().is_empty());

        for roll in DiceRoll::all() {
            let mut rng = SequenceRng::for_rolls([roll]);
            let region = table.pick_region(&mut rng).unwrap();
            let expected_region = if roll.parity == Parity::Odd {
                "East"
            } else {
                "West"
            };
            assert_eq!(region, expected_region);

            for name in table.region_names() {
                let mut rng = SequenceRng::for_rolls([roll]);
                let city = table.pick_city(&name, &mut rng).unwrap();
                assert_eq!(city, fixtures::coverage_city(&name, roll));
            }
        }
    }

    #[test]
    fn test_pick_region_reports_missing_roll() {
        let table = single_roll_table();
        // MockRng always rolls odd 2, which the single-roll chart lacks.
        let err = table.pick_region(&mut MockRng).unwrap_err();

        assert_eq!(
            err,
            LookupError::MissingRoll {
                table: AREA_TABLE.to_owned(),
                roll: DiceRoll::new(Parity::Odd, 2),
            }
        );
    }

    #[test]
    fn test_pick_region_without_area_table_reports_missing_roll() {
        let table =
            DestinationTable::from_records([RegionRecord::new("East", "odd", "7", "Boston")])
                .unwrap();
        let mut rng = SequenceRng::for_rolls([odd_seven()]);

        let err = table.pick_region(&mut rng).unwrap_err();

        assert!(matches!(err, LookupError::MissingRoll { table, .. } if table == AREA_TABLE));
    }

    #[test]
    fn test_pick_city_reports_missing_roll() {
        let table = single_roll_table();
        let err = table.pick_city("East", &mut MockRng).unwrap_err();

        assert!(matches!(err, LookupError::MissingRoll { table, .. } if table == "East"));
    }

    #[test]
    fn test_pick_city_resolves_area_table() {
        let table = single_roll_table();
        let mut rng = SequenceRng::for_rolls([odd_seven()]);

        let picked = table.pick_city(AREA_TABLE, &mut rng).unwrap();

        assert_eq!(picked, "East");
    }

    #[test]
    fn test_pick_city_rejects_unknown_region_without_rolling() {
        let table = full_table();
        let mut rng = SequenceRng::new(vec![]);

        for region in ["Atlantis", "", "east"] {
            let err = table.pick_city(region, &mut rng).unwrap_err();
            assert_eq!(err, LookupError::UnknownRegion(region.to_owned()));
        }
    }

    #[test]
    fn test_from_records_trims_all_fields() {
        let table = DestinationTable::from_records([
            RegionRecord::new(" area ", " odd", "7 ", "  East "),
            RegionRecord::new("East\t", "even ", " 7", " Boston"),
        ])
        .unwrap();
        let mut rng = SequenceRng::for_rolls([odd_seven(), DiceRoll::new(Parity::Even, 7)]);

        assert_eq!(table.pick_region(&mut rng).unwrap(), "East");
        assert_eq!(table.pick_city("East", &mut rng).unwrap(), "Boston");
    }

    #[test]
    fn test_from_records_last_duplicate_wins() {
        let table = DestinationTable::from_records([
            RegionRecord::new("area", "odd", "7", "East"),
            RegionRecord::new("area", "odd", "7", "West"),
        ])
        .unwrap();
        let mut rng = SequenceRng::for_rolls([odd_seven()]);

        assert_eq!(table.pick_region(&mut rng).unwrap(), "West");
    }

    #[test]
    fn test_from_records_rejects_invalid_parity() {
        let err = DestinationTable::from_records([
            RegionRecord::new("area", "odd", "7", "East"),
            RegionRecord::new("area", "oddish", "7", "West"),
        ])
        .unwrap_err();

        assert!(matches!(
            err,
            ParseError::InvalidParity { record: 2, ref value } if value == "oddish"
        ));
    }

    #[test]
    fn test_from_records_rejects_invalid_number() {
        let err =
            DestinationTable::from_records([RegionRecord::new("area", "even", "seven", "East")])
                .unwrap_err();

        assert!(matches!(
            err,
            ParseError::InvalidNumber { record: 1, ref value } if value == "seven"
        ));
    }

    #[test]
    fn test_from_csv_reader_rejects_missing_column() {
        let csv = "region,odd/even,name\narea,odd,East\n";

        let err = DestinationTable::from_csv_reader(csv.as_bytes()).unwrap_err();

        assert!(matches!(err, ParseError::Csv(_)));
    }

    #[test]
    fn test_from_csv_reader_accepts_parity_header_and_padding() {
        let csv = " region , parity , number , name \n area , EVEN , 12 , Plains \n";
        let table = DestinationTable::from_csv_reader(csv.as_bytes()).unwrap();
        let mut rng = SequenceRng::for_rolls([DiceRoll::new(Parity::Even, 12)]);

        assert_eq!(table.pick_region(&mut rng).unwrap(), "Plains");
    }

    #[test]
    fn test_region_names_excludes_area_table() {
        assert_eq!(full_table().region_names(), vec!["East", "West"]);
    }

    #[test]
    fn test_coverage_gaps_lists_holes_in_order() {
        let gaps = single_roll_table().coverage_gaps();

        // 21 holes in each of the two charts.
        assert_eq!(gaps.len(), 42);
        assert_eq!(gaps[0].table, "East");
        assert_eq!(gaps[0].roll, DiceRoll::new(Parity::Odd, 2));
        assert!(gaps.iter().all(|gap| gap.roll != odd_seven()));
        assert_eq!(gaps[21].table, AREA_TABLE);
    }

    #[test]
    fn test_coverage_gaps_flags_missing_area_table() {
        let table = DestinationTable::default();

        let gaps = table.coverage_gaps();

        assert_eq!(gaps.len(), 22);
        assert!(gaps.iter().all(|gap| gap.table == AREA_TABLE));
    }
}
