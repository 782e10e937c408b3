//! Difficulty filters: which continents a round may draw from.

use serde::{Deserialize, Serialize};

use crate::dataset::{Continent, CountryRecord};

/// Continent-based subset selector. `World` applies no filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    World,
    Europe,
    Asia,
    Africa,
    /// North and South America together.
    Americas,
    Oceania,
}

impl Difficulty {
    /// All selectable values, in menu order.
    pub const ALL: [Difficulty; 6] = [
        Difficulty::World,
        Difficulty::Europe,
        Difficulty::Asia,
        Difficulty::Africa,
        Difficulty::Americas,
        Difficulty::Oceania,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Difficulty::World => "world",
            Difficulty::Europe => "europe",
            Difficulty::Asia => "asia",
            Difficulty::Africa => "africa",
            Difficulty::Americas => "americas",
            Difficulty::Oceania => "oceania",
        }
    }

    /// Continents admitted by this filter; empty for `World`.
    #[must_use]
    pub const fn continents(self) -> &'static [Continent] {
        match self {
            Difficulty::World => &[],
            Difficulty::Europe => &[Continent::Europe],
            Difficulty::Asia => &[Continent::Asia],
            Difficulty::Africa => &[Continent::Africa],
            Difficulty::Americas => &[Continent::NorthAmerica, Continent::SouthAmerica],
            Difficulty::Oceania => &[Continent::Oceania],
        }
    }

    /// Whether a record passes this filter.
    #[must_use]
    pub fn admits(self, record: &CountryRecord) -> bool {
        match self {
            Difficulty::World => true,
            _ => self.continents().contains(&record.continent),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when parsing an unknown difficulty name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown difficulty {0:?} (expected one of: world, europe, asia, africa, americas, oceania)")]
pub struct ParseDifficultyError(pub String);

impl std::str::FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == wanted)
            .ok_or_else(|| ParseDifficultyError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::MultiPolygon;

    fn record(continent: Continent) -> CountryRecord {
        CountryRecord::new("X", continent, MultiPolygon::new(vec![]))
    }

    #[test]
    fn test_parse() {
        assert_eq!("europe".parse::<Difficulty>(), Ok(Difficulty::Europe));
        assert_eq!(" Americas ".parse::<Difficulty>(), Ok(Difficulty::Americas));
        assert!("antarctica".parse::<Difficulty>().is_err());

        for d in Difficulty::ALL {
            assert_eq!(d.to_string().parse::<Difficulty>(), Ok(d));
        }
    }

    #[test]
    fn test_world_admits_everything() {
        assert!(Difficulty::World.admits(&record(Continent::Unknown)));
        assert!(Difficulty::World.admits(&record(Continent::Asia)));
    }

    #[test]
    fn test_americas_is_union() {
        assert!(Difficulty::Americas.admits(&record(Continent::NorthAmerica)));
        assert!(Difficulty::Americas.admits(&record(Continent::SouthAmerica)));
        assert!(!Difficulty::Americas.admits(&record(Continent::Europe)));
        assert!(!Difficulty::Americas.admits(&record(Continent::Unknown)));
    }

    #[test]
    fn test_single_region_filters() {
        assert!(Difficulty::Oceania.admits(&record(Continent::Oceania)));
        assert!(!Difficulty::Oceania.admits(&record(Continent::Asia)));
        assert!(!Difficulty::Europe.admits(&record(Continent::Unknown)));
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Americas).unwrap();
        assert_eq!(json, "\"americas\"");
    }
}
