//! The quiz session: dataset, RNG, current round and score.
//!
//! ## Phases
//!
//! ```text
//! Idle ──start_round──▶ RoundActive ──submit──▶ AnsweredCorrect / AnsweredIncorrect
//!                           ▲                                  │
//!                           └────────────start_round───────────┘
//! ```
//!
//! There is no terminal phase. Submitting again after an answer re-checks
//! against the same country and counts as another attempt.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::difficulty::Difficulty;
use super::selector;
use super::validator::{self, Score, Verdict};
use crate::core::{QuizConfig, QuizError, QuizRng, QuizRngState, Result};
use crate::dataset::{CountryRecord, Dataset};
use crate::map::{Viewport, ViewportFramer};

/// Where the session is in the round cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No round has started yet.
    #[default]
    Idle,
    RoundActive,
    AnsweredCorrect,
    AnsweredIncorrect,
}

/// Result of a counted submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Feedback {
    pub verdict: Verdict,
    /// Score after this submission.
    pub score: Score,
}

impl Feedback {
    /// Line to show the player.
    #[must_use]
    pub fn message(&self) -> String {
        match &self.verdict {
            Verdict::Match => "Correct!".to_string(),
            Verdict::Miss { reveal } => format!("Sorry, that is {reveal}"),
        }
    }
}

/// A running quiz.
#[derive(Clone, Debug)]
pub struct QuizSession {
    dataset: Dataset,
    rng: QuizRng,
    framer: ViewportFramer,
    difficulty: Difficulty,
    phase: Phase,
    current: Option<usize>,
    score: Score,
}

impl QuizSession {
    /// Create a session from a loaded dataset and configuration.
    ///
    /// Uses the configured seed, or OS entropy when none is set.
    #[must_use]
    pub fn new(dataset: Dataset, config: &QuizConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => QuizRng::new(seed),
            None => QuizRng::from_entropy(),
        };
        Self::with_rng(dataset, rng, ViewportFramer::new(config.margin_factor))
    }

    #[must_use]
    pub fn with_rng(dataset: Dataset, rng: QuizRng, framer: ViewportFramer) -> Self {
        info!(countries = dataset.len(), seed = rng.seed(), "Quiz session created");
        Self {
            dataset,
            rng,
            framer,
            difficulty: Difficulty::default(),
            phase: Phase::Idle,
            current: None,
            score: Score::new(),
        }
    }

    /// Start a new round under the current difficulty.
    ///
    /// On [`QuizError::NoCountries`] the session is left as it was.
    pub fn start_round(&mut self) -> Result<&CountryRecord> {
        let index = selector::select_round(&self.dataset, self.difficulty, &mut self.rng)?;
        self.current = Some(index);
        self.phase = Phase::RoundActive;
        debug!(index, "Round started");
        Ok(&self.dataset.records()[index])
    }

    /// Switch difficulty and immediately start a round under it.
    ///
    /// The new difficulty sticks even when it admits no countries.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<&CountryRecord> {
        info!(%difficulty, "Difficulty changed");
        self.difficulty = difficulty;
        self.start_round()
    }

    /// Check an answer for the current round.
    ///
    /// Blank input and submissions before the first round are rejected
    /// without counting an attempt.
    pub fn submit(&mut self, input: &str) -> Result<Feedback> {
        let record = self
            .current
            .and_then(|i| self.dataset.get(i))
            .ok_or(QuizError::NoActiveRound)?;

        if validator::normalize_answer(input).is_empty() {
            return Err(QuizError::EmptyAnswer);
        }

        let verdict = validator::check(input, record);
        self.score.record(&verdict);
        self.phase = if verdict.is_match() {
            Phase::AnsweredCorrect
        } else {
            Phase::AnsweredIncorrect
        };
        debug!(
            country = %record.name,
            correct = verdict.is_match(),
            attempts = self.score.attempts,
            "Answer checked"
        );

        Ok(Feedback {
            verdict,
            score: self.score,
        })
    }

    /// Viewport framed on the current country.
    ///
    /// Falls back to the world view when the country has no geometry.
    #[must_use]
    pub fn country_view(&self) -> Option<Viewport> {
        match self.current().and_then(|r| r.bounds) {
            Some(bounds) => Some(self.framer.frame(&bounds).viewport),
            None => self.world_view(),
        }
    }

    /// Viewport covering the whole dataset.
    #[must_use]
    pub fn world_view(&self) -> Option<Viewport> {
        self.dataset.world_bounds().map(|b| Viewport::of_bounds(&b))
    }

    #[must_use]
    pub fn current(&self) -> Option<&CountryRecord> {
        self.current.and_then(|i| self.dataset.get(i))
    }

    #[must_use]
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> Score {
        self.score
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// RNG state, for replaying a session.
    #[must_use]
    pub fn rng_state(&self) -> QuizRngState {
        self.rng.state()
    }
}
