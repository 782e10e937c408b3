//! # geo-quiz
//!
//! A country recognition quiz over Natural Earth boundary data.
//!
//! The player is shown a map framed around one highlighted country and
//! types its name. Localized (Polish) names are accepted alongside the
//! English one.
//!
//! ## Design Principles
//!
//! 1. **Load once, read-only after**: the `Dataset` is normalized at
//!    start-up and never mutated.
//!
//! 2. **Nothing is fatal**: missing files, empty filters and blank answers
//!    become `Advisory` values, and the game keeps running.
//!
//! 3. **Deterministic when asked**: round selection uses a seedable
//!    ChaCha8 RNG, so a fixed seed replays the same countries.
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, RNG
//! - `dataset`: Country records, static tables, normalization, file loading
//! - `map`: Bounding boxes, viewport framing, terminal rendering
//! - `quiz`: Difficulty filters, round selection, answer checking, session

pub mod core;
pub mod dataset;
pub mod map;
pub mod quiz;

// Re-export commonly used types
pub use crate::core::{QuizConfig, QuizError, QuizRng, QuizRngState, Result};

pub use crate::dataset::{
    load_dataset, normalize, Continent, CountryRecord, Dataset, LoadOutcome, RawFeature, RawTable,
};

pub use crate::map::{BoundingBox, Framing, MapRaster, Viewport, ViewportFramer};

pub use crate::quiz::{
    check, select_round, Advisory, Difficulty, Feedback, Phase, QuizSession, Score, Severity,
    Verdict,
};
