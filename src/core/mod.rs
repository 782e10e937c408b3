//! Core types: configuration, errors and the seedable RNG.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{
    default_data_paths, QuizConfig, DATASET_DOWNLOAD_URL, DATASET_FILE_NAME,
    DEFAULT_MARGIN_FACTOR,
};
pub use error::{QuizError, Result};
pub use rng::{QuizRng, QuizRngState};
