//! Dataset normalization: provider columns to country records.
//!
//! Boundary datasets disagree on column names. Natural Earth alone ships
//! `NAME` and `ADMIN` for the country name, and `CONTINENT`, `REGION_WB`
//! or `REGION_UN` for the region. Normalization is a priority-ordered
//! rename pass: for each canonical field, the first candidate column
//! present in the table wins.
//!
//! When no continent column exists at all, continents are inferred from
//! the static allow-lists in [`tables`](super::tables).

use tracing::{debug, info, warn};

use super::raw::RawTable;
use super::record::{Continent, CountryRecord};
use super::registry::Dataset;
use super::tables;
use crate::core::{QuizError, Result};

/// Canonical field filled from the first present candidate column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnRule {
    pub field: &'static str,
    pub candidates: &'static [&'static str],
}

impl ColumnRule {
    /// First candidate column the table declares.
    #[must_use]
    pub fn resolve(&self, table: &RawTable) -> Option<&'static str> {
        self.candidates.iter().copied().find(|c| table.has_column(c))
    }
}

pub const NAME_RULE: ColumnRule = ColumnRule {
    field: "name",
    candidates: &["NAME", "ADMIN"],
};

pub const CONTINENT_RULE: ColumnRule = ColumnRule {
    field: "continent",
    candidates: &["CONTINENT", "REGION_WB", "REGION_UN"],
};

/// Every column the normalizer may read. Loaders that cannot list a
/// source's columns probe for these.
pub const KNOWN_COLUMNS: &[&str] = &["NAME", "ADMIN", "CONTINENT", "REGION_WB", "REGION_UN"];

/// Where a record's continent comes from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ContinentSource {
    Column(&'static str),
    AllowLists,
}

/// Build a [`Dataset`] from a raw table.
///
/// Rows without a name are skipped. Later rows repeating an earlier name
/// are skipped too, so names stay unique.
pub fn normalize(table: RawTable) -> Result<Dataset> {
    let name_column = NAME_RULE.resolve(&table).ok_or(QuizError::MissingColumn {
        field: NAME_RULE.field,
        tried: NAME_RULE.candidates,
    })?;

    let continent_source = match CONTINENT_RULE.resolve(&table) {
        Some(column) => ContinentSource::Column(column),
        None => {
            info!("No continent column; inferring continents from country names");
            ContinentSource::AllowLists
        }
    };
    debug!(name_column, ?continent_source, "Resolved dataset columns");

    let mut dataset = Dataset::new();
    let mut skipped = 0usize;

    for (row, feature) in table.into_rows().into_iter().enumerate() {
        let name = match feature.get(name_column).map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => {
                warn!(row, "Skipping feature without a {} value", name_column);
                skipped += 1;
                continue;
            }
        };

        let continent = match continent_source {
            ContinentSource::Column(column) => feature
                .get(column)
                .map(|label| Continent::from_label(label.trim()))
                .unwrap_or(Continent::Unknown),
            ContinentSource::AllowLists => tables::continent_for(&name),
        };

        let aliases = tables::localized_names(&name);
        let record = CountryRecord::new(name, continent, feature.geometry).with_aliases(aliases);

        if let Err(e) = dataset.insert(record) {
            warn!(row, "Skipping feature: {}", e);
            skipped += 1;
        }
    }

    if skipped > 0 {
        warn!("Skipped {} of {} features", skipped, skipped + dataset.len());
    }
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::raw::RawFeature;
    use geo::MultiPolygon;

    fn feature() -> RawFeature {
        RawFeature::new(MultiPolygon::new(vec![]))
    }

    #[test]
    fn test_name_prefers_name_over_admin() {
        let mut table = RawTable::new();
        table.push(feature().with_attr("ADMIN", "Republic of Poland").with_attr("NAME", "Poland"));

        let dataset = normalize(table).unwrap();
        assert!(dataset.contains("Poland"));
        assert!(!dataset.contains("Republic of Poland"));
    }

    #[test]
    fn test_name_falls_back_to_admin() {
        let mut table = RawTable::new();
        table.push(feature().with_attr("ADMIN", "Chile"));

        let dataset = normalize(table).unwrap();
        assert!(dataset.contains("Chile"));
    }

    #[test]
    fn test_missing_name_column_fails() {
        let mut table = RawTable::new();
        table.push(feature().with_attr("SOVEREIGNT", "Chile"));

        let err = normalize(table).unwrap_err();
        assert!(matches!(err, QuizError::MissingColumn { field: "name", .. }));
    }

    #[test]
    fn test_continent_rule_priority() {
        let mut table = RawTable::new();
        table.push(
            feature()
                .with_attr("NAME", "Chile")
                .with_attr("REGION_UN", "Americas")
                .with_attr("REGION_WB", "Latin America & Caribbean")
                .with_attr("CONTINENT", "South America"),
        );
        assert_eq!(
            normalize(table).unwrap().get_by_name("Chile").unwrap().continent,
            Continent::SouthAmerica
        );

        let mut table = RawTable::new();
        table.push(
            feature()
                .with_attr("NAME", "Chile")
                .with_attr("REGION_UN", "Americas")
                .with_attr("REGION_WB", "South America"),
        );
        assert_eq!(
            normalize(table).unwrap().get_by_name("Chile").unwrap().continent,
            Continent::SouthAmerica
        );
    }

    #[test]
    fn test_unrecognised_region_label_is_unknown() {
        let mut table = RawTable::new();
        table.push(feature().with_attr("NAME", "Germany").with_attr("REGION_WB", "Europe & Central Asia"));
        table.push(feature().with_attr("NAME", "Antarctica").with_attr("REGION_WB", "Antarctica"));

        let dataset = normalize(table).unwrap();
        assert!(dataset.iter().all(|r| r.continent == Continent::Unknown));
    }

    #[test]
    fn test_continent_column_present_skips_allow_lists() {
        let mut table = RawTable::with_columns(["NAME", "CONTINENT"]);
        table.push(feature().with_attr("NAME", "Poland"));

        let dataset = normalize(table).unwrap();
        assert_eq!(dataset.get_by_name("Poland").unwrap().continent, Continent::Unknown);
    }

    #[test]
    fn test_continent_inferred_without_column() {
        let mut table = RawTable::new();
        for name in ["Poland", "Japan", "Kenya", "Mexico", "Brazil", "Tonga", "Atlantis"] {
            table.push(feature().with_attr("NAME", name));
        }

        let dataset = normalize(table).unwrap();
        let continent = |n: &str| dataset.get_by_name(n).unwrap().continent;
        assert_eq!(continent("Poland"), Continent::Europe);
        assert_eq!(continent("Japan"), Continent::Asia);
        assert_eq!(continent("Kenya"), Continent::Africa);
        assert_eq!(continent("Mexico"), Continent::NorthAmerica);
        assert_eq!(continent("Brazil"), Continent::SouthAmerica);
        assert_eq!(continent("Tonga"), Continent::Oceania);
        assert_eq!(continent("Atlantis"), Continent::Unknown);
    }

    #[test]
    fn test_aliases_attached() {
        let mut table = RawTable::new();
        table.push(feature().with_attr("NAME", "Poland"));
        table.push(feature().with_attr("NAME", "Atlantis"));

        let dataset = normalize(table).unwrap();
        assert_eq!(
            dataset.get_by_name("Poland").unwrap().accepted_answers(),
            &["polska".to_string(), "poland".to_string()]
        );
        assert_eq!(
            dataset.get_by_name("Atlantis").unwrap().accepted_answers(),
            &["atlantis".to_string()]
        );
    }

    #[test]
    fn test_blank_and_duplicate_names_skipped() {
        let mut table = RawTable::new();
        table.push(feature().with_attr("NAME", "Chile"));
        table.push(feature().with_attr("NAME", "  "));
        table.push(feature().with_attr("NAME", "Chile"));
        table.push(feature().with_attr("NAME", " Peru "));

        let dataset = normalize(table).unwrap();
        assert_eq!(dataset.len(), 2);
        assert!(dataset.contains("Peru"));
    }

    #[test]
    fn test_empty_table_needs_columns() {
        assert!(normalize(RawTable::new()).is_err());
        assert!(normalize(RawTable::with_columns(["NAME"])).unwrap().is_empty());
    }
}
