//! Country records - the immutable unit of the dataset.
//!
//! A `CountryRecord` is built once by the normalizer and never changes.
//! It carries everything a round needs: the canonical name, the continent
//! used by difficulty filters, the accepted answers and the geometry used
//! for framing and drawing.

use geo::MultiPolygon;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::map::BoundingBox;

/// Continent label used by difficulty filters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    Europe,
    Asia,
    Africa,
    NorthAmerica,
    SouthAmerica,
    Oceania,
    /// Anything the filters do not recognise. Only reachable via "world".
    Unknown,
}

impl Continent {
    /// All six named regions, excluding `Unknown`.
    pub const REGIONS: [Continent; 6] = [
        Continent::Europe,
        Continent::Asia,
        Continent::Africa,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Oceania,
    ];

    /// Exact match on the dataset label ("Europe", "North America", ...).
    ///
    /// Labels outside the six regions map to `Unknown`.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Europe" => Continent::Europe,
            "Asia" => Continent::Asia,
            "Africa" => Continent::Africa,
            "North America" => Continent::NorthAmerica,
            "South America" => Continent::SouthAmerica,
            "Oceania" => Continent::Oceania,
            _ => Continent::Unknown,
        }
    }

    /// Display label, the inverse of [`Continent::from_label`].
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Continent::Europe => "Europe",
            Continent::Asia => "Asia",
            Continent::Africa => "Africa",
            Continent::NorthAmerica => "North America",
            Continent::SouthAmerica => "South America",
            Continent::Oceania => "Oceania",
            Continent::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for Continent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Accepted answers, localized aliases first. Most countries have one or two.
pub type Answers = SmallVec<[String; 4]>;

/// A single country of the quiz.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Canonical English name; unique within a dataset.
    pub name: String,

    pub continent: Continent,

    /// Lowercase accepted answers, de-duplicated, in insertion order.
    /// Always contains the lowercased canonical name.
    accepted_answers: Answers,

    /// Boundary geometry.
    pub geometry: MultiPolygon<f64>,

    /// Bounds of `geometry`; `None` when the geometry is empty.
    pub bounds: Option<BoundingBox>,
}

impl CountryRecord {
    /// Create a record with the canonical name as its only answer.
    pub fn new(name: impl Into<String>, continent: Continent, geometry: MultiPolygon<f64>) -> Self {
        let name = name.into();
        let bounds = BoundingBox::of(&geometry);
        let mut accepted_answers = Answers::new();
        accepted_answers.push(name.to_lowercase());

        Self {
            name,
            continent,
            accepted_answers,
            geometry,
            bounds,
        }
    }

    /// Replace the accepted answers with `aliases` followed by the
    /// lowercased canonical name.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut answers = Answers::new();
        let canonical = self.canonical_answer();
        for alias in aliases
            .into_iter()
            .map(|a| a.as_ref().trim().to_lowercase())
            .chain(std::iter::once(canonical))
        {
            if !alias.is_empty() && !answers.contains(&alias) {
                answers.push(alias);
            }
        }
        self.accepted_answers = answers;
        self
    }

    /// The lowercased canonical name.
    #[must_use]
    pub fn canonical_answer(&self) -> String {
        self.name.to_lowercase()
    }

    #[must_use]
    pub fn accepted_answers(&self) -> &[String] {
        &self.accepted_answers
    }

    /// Membership test on an already-normalized answer.
    #[must_use]
    pub fn accepts(&self, normalized: &str) -> bool {
        self.accepted_answers.iter().any(|a| a == normalized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_continent_labels_round_trip() {
        for continent in Continent::REGIONS {
            assert_eq!(Continent::from_label(continent.label()), continent);
        }
        assert_eq!(Continent::from_label("Antarctica"), Continent::Unknown);
        assert_eq!(Continent::from_label("europe"), Continent::Unknown);
        assert_eq!(Continent::NorthAmerica.to_string(), "North America");
    }

    #[test]
    fn test_new_record_accepts_canonical_name() {
        let record = CountryRecord::new("Poland", Continent::Europe, MultiPolygon::new(vec![]));

        assert_eq!(record.accepted_answers(), &["poland".to_string()]);
        assert!(record.accepts("poland"));
        assert!(record.bounds.is_none());
    }

    #[test]
    fn test_aliases_come_first_and_dedup() {
        let record = CountryRecord::new("Albania", Continent::Europe, MultiPolygon::new(vec![]))
            .with_aliases(["albania", "Shqipëria "]);

        assert_eq!(
            record.accepted_answers(),
            &["albania".to_string(), "shqipëria".to_string()]
        );
    }

    #[test]
    fn test_aliases_keep_canonical_last() {
        let record = CountryRecord::new("United Kingdom", Continent::Europe, MultiPolygon::new(vec![]))
            .with_aliases(["wielka brytania", "uk"]);

        assert_eq!(record.accepted_answers().last().unwrap(), "united kingdom");
        assert!(record.accepts("uk"));
    }
}
