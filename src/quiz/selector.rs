//! Round selection: filter by difficulty, then draw uniformly.

use tracing::debug;

use super::difficulty::Difficulty;
use crate::core::{QuizError, QuizRng, Result};
use crate::dataset::Dataset;

/// Indices of the records a difficulty admits, in dataset order.
#[must_use]
pub fn filter_countries(dataset: &Dataset, difficulty: Difficulty) -> Vec<usize> {
    dataset.indices_where(|r| difficulty.admits(r))
}

/// Pick one country for a round.
///
/// Draws uniformly over `[0, filtered_count)`. Fails with
/// [`QuizError::NoCountries`] when the filter admits nothing.
pub fn select_round(dataset: &Dataset, difficulty: Difficulty, rng: &mut QuizRng) -> Result<usize> {
    let candidates = filter_countries(dataset, difficulty);
    let index = rng
        .choose(&candidates)
        .copied()
        .ok_or(QuizError::NoCountries(difficulty))?;

    debug!(
        %difficulty,
        candidates = candidates.len(),
        country = dataset.get(index).map(|r| r.name.as_str()),
        "Selected round"
    );
    Ok(index)
}
