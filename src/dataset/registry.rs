//! Dataset of country records.
//!
//! The `Dataset` stores every country in load order and indexes them by
//! canonical name. It is built once at start-up and read-only afterwards.

use rustc_hash::FxHashMap;

use super::record::{Continent, CountryRecord};
use crate::core::{QuizError, Result};
use crate::map::BoundingBox;

/// Ordered, name-indexed collection of countries.
///
/// ## Example
///
/// ```
/// use geo::MultiPolygon;
/// use geo_quiz::dataset::{Continent, CountryRecord, Dataset};
///
/// let mut dataset = Dataset::new();
/// dataset
///     .insert(CountryRecord::new("Poland", Continent::Europe, MultiPolygon::new(vec![])))
///     .unwrap();
///
/// let found = dataset.get_by_name("Poland").unwrap();
/// assert_eq!(found.continent, Continent::Europe);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<CountryRecord>,
    by_name: FxHashMap<String, usize>,
}

impl Dataset {
    /// Create a new empty dataset.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, returning its index.
    ///
    /// Fails with [`QuizError::DuplicateCountry`] if the name is taken.
    pub fn insert(&mut self, record: CountryRecord) -> Result<usize> {
        if self.by_name.contains_key(&record.name) {
            return Err(QuizError::DuplicateCountry(record.name));
        }
        let index = self.records.len();
        self.by_name.insert(record.name.clone(), index);
        self.records.push(record);
        Ok(index)
    }

    /// Get a record by its load-order index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CountryRecord> {
        self.records.get(index)
    }

    /// Get a record by canonical name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&CountryRecord> {
        self.index_of(name).map(|i| &self.records[i])
    }

    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.by_name.get(name).copied()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in load order.
    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Indices of records matching a predicate, in load order.
    pub fn indices_where<F>(&self, predicate: F) -> Vec<usize>
    where
        F: Fn(&CountryRecord) -> bool,
    {
        self.records
            .iter()
            .enumerate()
            .filter(|(_, r)| predicate(*r))
            .map(|(i, _)| i)
            .collect()
    }

    /// Records on a given continent.
    pub fn on_continent(&self, continent: Continent) -> impl Iterator<Item = &CountryRecord> {
        self.records.iter().filter(move |r| r.continent == continent)
    }

    /// Total bounds of every geometry in the dataset.
    #[must_use]
    pub fn world_bounds(&self) -> Option<BoundingBox> {
        BoundingBox::union_all(self.records.iter().filter_map(|r| r.bounds.as_ref()))
    }
}
