//! Provider-shaped attribute tables, before normalization.
//!
//! Loaders fill a `RawTable` with whatever column names the source file
//! uses. The normalizer then decides which columns mean what.

use geo::MultiPolygon;
use rustc_hash::FxHashMap;

/// One row of a raw table: string attributes plus a boundary.
#[derive(Clone, Debug)]
pub struct RawFeature {
    pub attributes: FxHashMap<String, String>,
    pub geometry: MultiPolygon<f64>,
}

impl RawFeature {
    #[must_use]
    pub fn new(geometry: MultiPolygon<f64>) -> Self {
        Self {
            attributes: FxHashMap::default(),
            geometry,
        }
    }

    /// Set an attribute (builder style).
    #[must_use]
    pub fn with_attr(mut self, column: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(column.into(), value.into());
        self
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.attributes.get(column).map(String::as_str)
    }
}

/// A table of raw features with an explicit, ordered column list.
///
/// Column presence is a property of the table, not of individual rows:
/// a column is present if the source declares it, even when some rows
/// leave it blank.
#[derive(Clone, Debug, Default)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<RawFeature>,
}

impl RawTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table with a declared column list.
    pub fn with_columns<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row. Any attribute names not yet declared become columns,
    /// in sorted order so that loading is deterministic.
    pub fn push(&mut self, row: RawFeature) {
        let mut new_columns: Vec<&String> = row
            .attributes
            .keys()
            .filter(|k| !self.columns.contains(*k))
            .collect();
        new_columns.sort();
        let new_columns: Vec<String> = new_columns.into_iter().cloned().collect();
        self.columns.extend(new_columns);
        self.rows.push(row);
    }

    #[must_use]
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn rows(&self) -> &[RawFeature] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<RawFeature> {
        self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
