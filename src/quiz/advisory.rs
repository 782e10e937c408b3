//! User-facing, non-fatal messages.

use std::path::PathBuf;

use super::difficulty::Difficulty;
use crate::core::{QuizError, DATASET_DOWNLOAD_URL};

/// How serious an advisory is, for front ends that style them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// Something the player should be told. None of these stop the game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Advisory {
    /// No dataset file at any candidate location.
    DatasetMissing { searched: Vec<PathBuf> },
    /// A dataset file exists but could not be read.
    LoadFailed { path: PathBuf, message: String },
    /// The chosen difficulty has no countries.
    NoCountries { difficulty: Difficulty },
    /// An answer was submitted before any round started.
    NoActiveRound,
    /// The submitted answer was blank.
    EmptyAnswer,
}

impl Advisory {
    #[must_use]
    pub fn severity(&self) -> Severity {
        match self {
            Advisory::DatasetMissing { .. } | Advisory::NoActiveRound | Advisory::EmptyAnswer => {
                Severity::Info
            }
            Advisory::NoCountries { .. } => Severity::Warning,
            Advisory::LoadFailed { .. } => Severity::Error,
        }
    }

    /// Short heading.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Advisory::DatasetMissing { .. } => "No geographic data",
            Advisory::LoadFailed { .. } => "Error",
            Advisory::NoCountries { .. } => "Warning",
            Advisory::NoActiveRound | Advisory::EmptyAnswer => "Information",
        }
    }

    /// Session-level errors that map onto an advisory.
    #[must_use]
    pub fn from_error(error: &QuizError) -> Option<Self> {
        match error {
            QuizError::NoCountries(difficulty) => Some(Advisory::NoCountries {
                difficulty: *difficulty,
            }),
            QuizError::NoActiveRound => Some(Advisory::NoActiveRound),
            QuizError::EmptyAnswer => Some(Advisory::EmptyAnswer),
            _ => None,
        }
    }
}

impl std::fmt::Display for Advisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Advisory::DatasetMissing { searched } => {
                writeln!(f, "No geographic data file was found. Looked in:")?;
                for path in searched {
                    writeln!(f, "  - {}", path.display())?;
                }
                writeln!(f)?;
                writeln!(f, "To get the data:")?;
                writeln!(f, "1. Visit {DATASET_DOWNLOAD_URL}")?;
                writeln!(f, "2. Download 'Admin 0 – Countries'")?;
                write!(f, "3. Unpack the archive into a 'data' directory next to the program")
            }
            Advisory::LoadFailed { path, message } => {
                write!(f, "Could not load geographic data from {}: {message}", path.display())
            }
            Advisory::NoCountries { difficulty } => {
                write!(f, "No countries available for difficulty '{difficulty}'")
            }
            Advisory::NoActiveRound => f.write_str("Start a new round first"),
            Advisory::EmptyAnswer => f.write_str("Type a country name"),
        }
    }
}
