//! Error types shared by the loader, the dataset and the quiz session.

use std::path::PathBuf;

use thiserror::Error;

use crate::quiz::Difficulty;

/// Errors raised by the quiz library.
///
/// None of these are fatal to the game: the session turns them into
/// [`Advisory`](crate::quiz::Advisory) values and keeps running.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("shapefile error: {0}")]
    Shapefile(#[from] shapefile::Error),

    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    #[error("unsupported dataset format: {0:?}")]
    UnsupportedFormat(PathBuf),

    #[error("dataset has no {field} column (tried {tried:?})")]
    MissingColumn {
        field: &'static str,
        tried: &'static [&'static str],
    },

    #[error("country {0:?} is already in the dataset")]
    DuplicateCountry(String),

    #[error("no countries available for difficulty {0}")]
    NoCountries(Difficulty),

    #[error("no round is active")]
    NoActiveRound,

    #[error("answer is empty")]
    EmptyAnswer,
}

pub type Result<T> = std::result::Result<T, QuizError>;
