//! Country dataset: records, static tables, normalization and loading.
//!
//! Loading goes file -> [`RawTable`] -> [`normalize`] -> [`Dataset`].
//! The dataset is read-only once built.

pub mod loader;
pub mod normalizer;
pub mod raw;
pub mod record;
pub mod registry;
pub mod tables;

pub use loader::{load_dataset, load_from, read_table, LoadOutcome};
pub use normalizer::{normalize, ColumnRule, CONTINENT_RULE, NAME_RULE};
pub use raw::{RawFeature, RawTable};
pub use record::{Continent, CountryRecord};
pub use registry::Dataset;
