//! Character-grid map rendering for terminal front ends.
//!
//! Each cell samples the geometry at its centre point: the highlighted
//! country draws as `#`, any other land as `.`, and everything else as a
//! blank. Countries are pre-filtered by bounding box before the
//! point-in-polygon test.

use geo::{Contains, Point};

use super::viewport::Viewport;
use crate::dataset::Dataset;

pub const HIGHLIGHT: char = '#';
pub const LAND: char = '.';
pub const WATER: char = ' ';

/// A rendered map, one string per row, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapRaster {
    rows: Vec<String>,
}

impl MapRaster {
    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.chars().count())
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Character at column `x`, row `y` (row 0 at the top).
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Option<char> {
        self.rows.get(y).and_then(|r| r.chars().nth(x))
    }

    #[must_use]
    pub fn count(&self, c: char) -> usize {
        self.rows.iter().map(|r| r.chars().filter(|&ch| ch == c).count()).sum()
    }
}

impl std::fmt::Display for MapRaster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let border = format!("+{}+", "-".repeat(self.width()));
        writeln!(f, "{border}")?;
        for row in &self.rows {
            writeln!(f, "|{row}|")?;
        }
        write!(f, "{border}")
    }
}

/// Render `dataset` inside `viewport` onto a `width` x `height` grid.
///
/// `highlight` is the dataset index drawn with [`HIGHLIGHT`].
#[must_use]
pub fn render(
    dataset: &Dataset,
    highlight: Option<usize>,
    viewport: &Viewport,
    width: usize,
    height: usize,
) -> MapRaster {
    let cell_w = viewport.width() / width.max(1) as f64;
    let cell_h = viewport.height() / height.max(1) as f64;

    // Only countries overlapping the viewport can hit a cell.
    let visible: Vec<(usize, &crate::dataset::CountryRecord)> = dataset
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            r.bounds.is_some_and(|b| {
                b.max_x >= viewport.x_min
                    && b.min_x <= viewport.x_max
                    && b.max_y >= viewport.y_min
                    && b.min_y <= viewport.y_max
            })
        })
        .collect();

    let rows = (0..height)
        .map(|row| {
            let y = viewport.y_max - (row as f64 + 0.5) * cell_h;
            (0..width)
                .map(|col| {
                    let x = viewport.x_min + (col as f64 + 0.5) * cell_w;
                    let point = Point::new(x, y);
                    let mut glyph = WATER;
                    for (index, record) in &visible {
                        let inside = record.bounds.is_some_and(|b| b.contains(x, y))
                            && record.geometry.contains(&point);
                        if inside {
                            if Some(*index) == highlight {
                                return HIGHLIGHT;
                            }
                            glyph = LAND;
                        }
                    }
                    glyph
                })
                .collect::<String>()
        })
        .collect();

    MapRaster { rows }
}
