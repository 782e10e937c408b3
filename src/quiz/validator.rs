//! Answer checking and score keeping.

use serde::{Deserialize, Serialize};

use crate::dataset::CountryRecord;

/// Outcome of checking one answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Match,
    /// Wrong answer. `reveal` is what to show the player.
    Miss { reveal: String },
}

impl Verdict {
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match)
    }
}

/// Trim and lowercase raw user input.
#[must_use]
pub fn normalize_answer(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Check raw user input against a record's accepted answers.
#[must_use]
pub fn check(input: &str, record: &CountryRecord) -> Verdict {
    if record.accepts(&normalize_answer(input)) {
        Verdict::Match
    } else {
        Verdict::Miss {
            reveal: reveal_name(record),
        }
    }
}

/// Name shown after a miss.
///
/// The first accepted answer that differs from the lowercased canonical
/// name, capitalized. Falls back to the canonical name when every answer
/// is just the canonical name.
#[must_use]
pub fn reveal_name(record: &CountryRecord) -> String {
    let canonical = record.canonical_answer();
    record
        .accepted_answers()
        .iter()
        .find(|a| **a != canonical)
        .map(|a| capitalize(a))
        .unwrap_or_else(|| record.name.clone())
}

/// Upper-case the first character and lower-case the rest.
#[must_use]
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// Running tally of attempts and correct answers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub attempts: u32,
    pub correct: u32,
}

impl Score {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one checked answer.
    pub fn record(&mut self, verdict: &Verdict) {
        self.attempts += 1;
        if verdict.is_match() {
            self.correct += 1;
        }
    }

    /// Accuracy as a floored integer percentage; 0 before any attempt.
    #[must_use]
    pub fn accuracy_percent(&self) -> u32 {
        if self.attempts == 0 {
            0
        } else {
            (u64::from(self.correct) * 100 / u64::from(self.attempts)) as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Continent;
    use geo::MultiPolygon;

    fn poland() -> CountryRecord {
        CountryRecord::new("Poland", Continent::Europe, MultiPolygon::new(vec![])).with_aliases(["polska"])
    }

    #[test]
    fn test_check_localized_name() {
        assert_eq!(check("polska", &poland()), Verdict::Match);
        assert_eq!(check("Polska ", &poland()), Verdict::Match);
        assert_eq!(check("  POLAND", &poland()), Verdict::Match);
    }

    #[test]
    fn test_check_miss_reveals_alias() {
        assert_eq!(
            check("pland", &poland()),
            Verdict::Miss {
                reveal: "Polska".to_string()
            }
        );
    }

    #[test]
    fn test_reveal_falls_back_to_canonical() {
        let albania = CountryRecord::new("Albania", Continent::Europe, MultiPolygon::new(vec![]))
            .with_aliases(["albania"]);
        assert_eq!(reveal_name(&albania), "Albania");

        let atlantis = CountryRecord::new("Atlantis", Continent::Unknown, MultiPolygon::new(vec![]));
        assert_eq!(reveal_name(&atlantis), "Atlantis");
    }

    #[test]
    fn test_reveal_uses_first_alias() {
        let uk = CountryRecord::new("United Kingdom", Continent::Europe, MultiPolygon::new(vec![]))
            .with_aliases(["wielka brytania", "zjednoczone królestwo", "uk"]);
        assert_eq!(reveal_name(&uk), "Wielka brytania");
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("papua-nowa gwinea"), "Papua-nowa gwinea");
        assert_eq!(capitalize("łotwa"), "Łotwa");
        assert_eq!(capitalize("RPA"), "Rpa");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_accuracy() {
        let mut score = Score::new();
        assert_eq!(score.accuracy_percent(), 0);

        score.record(&Verdict::Match);
        score.record(&Verdict::Miss { reveal: "X".into() });
        score.record(&Verdict::Match);

        assert_eq!(score.attempts, 3);
        assert_eq!(score.correct, 2);
        assert_eq!(score.accuracy_percent(), 66);
    }

    #[test]
    fn test_accuracy_floors_exactly() {
        // 29/50 is 57.99999... in binary floating point
        let score = Score {
            attempts: 50,
            correct: 29,
        };
        assert_eq!(score.accuracy_percent(), 58);
    }
}
