//! Quiz configuration parameters.
//!
//! Configuration comes from command-line flags only; there is no
//! config file. `QuizConfig` is serializable so a session's settings can
//! be logged or reproduced alongside its RNG seed.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// File name of the Natural Earth 1:110m countries shapefile.
pub const DATASET_FILE_NAME: &str = "ne_110m_admin_0_countries.shp";

/// Where to download the dataset when none is found locally.
pub const DATASET_DOWNLOAD_URL: &str =
    "https://www.naturalearthdata.com/downloads/110m-cultural-vectors/";

/// Default multiplier applied to a country's extent to size the viewport.
pub const DEFAULT_MARGIN_FACTOR: f64 = 5.0;

/// Candidate dataset locations, checked in order. First existing wins.
///
/// The last candidate lives in the user's Downloads folder and is only
/// present when a home directory can be determined.
#[must_use]
pub fn default_data_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        Path::new("data").join(DATASET_FILE_NAME),
        PathBuf::from(DATASET_FILE_NAME),
        Path::new("..").join("data").join(DATASET_FILE_NAME),
    ];
    if let Some(home) = home_dir() {
        paths.push(home.join("Downloads").join(DATASET_FILE_NAME));
    }
    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}

/// Quiz configuration parameters.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QuizConfig {
    /// Viewport side as a multiple of the country's larger extent (default: 5.0).
    /// Larger values show more surrounding context.
    pub margin_factor: f64,

    /// Random seed for round selection.
    /// `None` draws a seed from OS entropy at start-up.
    pub seed: Option<u64>,

    /// Dataset locations, checked in order.
    pub data_paths: Vec<PathBuf>,

    /// Map raster width in character cells.
    pub map_width: usize,

    /// Map raster height in character cells.
    pub map_height: usize,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            margin_factor: DEFAULT_MARGIN_FACTOR,
            seed: None,
            data_paths: default_data_paths(),
            map_width: 72,
            map_height: 28,
        }
    }
}

impl QuizConfig {
    /// Set a custom margin factor.
    pub fn with_margin_factor(mut self, factor: f64) -> Self {
        self.margin_factor = factor;
        self
    }

    /// Set a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Replace the candidate list with a single explicit dataset path.
    pub fn with_data_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_paths = vec![path.into()];
        self
    }

    /// Set the map raster size in character cells.
    pub fn with_map_size(mut self, width: usize, height: usize) -> Self {
        self.map_width = width;
        self.map_height = height;
        self
    }
}
