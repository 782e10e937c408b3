//! Viewport framing around a selected country.
//!
//! The country view is a square centred on the country's bounding box,
//! `size * margin_factor` on each side, where `size` is the larger of
//! the box's width and height. Small countries therefore get enough
//! surrounding land to be placeable without a tell-tale extreme zoom.

use serde::{Deserialize, Serialize};

use super::bounds::BoundingBox;
use crate::core::DEFAULT_MARGIN_FACTOR;

/// Smallest extent used for framing, in dataset units.
///
/// Applied when a box has zero width and height (a single point).
pub const MIN_VIEW_EXTENT: f64 = 1.0;

/// Visible coordinate rectangle of the map display.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Viewport {
    /// Viewport showing exactly the given bounds (the "whole world" view).
    #[must_use]
    pub fn of_bounds(bounds: &BoundingBox) -> Self {
        Self {
            x_min: bounds.min_x,
            x_max: bounds.max_x,
            y_min: bounds.min_y,
            y_max: bounds.max_y,
        }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }

    #[must_use]
    pub fn center(&self) -> (f64, f64) {
        ((self.x_min + self.x_max) / 2.0, (self.y_min + self.y_max) / 2.0)
    }
}

/// Result of framing a country.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Framing {
    /// Midpoint of the country's bounding box.
    pub center: (f64, f64),
    /// Larger of the box's width and height.
    pub size: f64,
    /// Square viewport around `center`.
    pub viewport: Viewport,
}

/// Computes square country viewports with a fixed margin factor.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportFramer {
    pub margin_factor: f64,
}

impl Default for ViewportFramer {
    fn default() -> Self {
        Self::new(DEFAULT_MARGIN_FACTOR)
    }
}

impl ViewportFramer {
    #[must_use]
    pub const fn new(margin_factor: f64) -> Self {
        Self { margin_factor }
    }

    /// Frame a country's bounding box.
    #[must_use]
    pub fn frame(&self, bounds: &BoundingBox) -> Framing {
        let center = bounds.center();
        let size = bounds.width().max(bounds.height());

        let extent = if size > 0.0 { size } else { MIN_VIEW_EXTENT };
        let half = extent * self.margin_factor / 2.0;

        Framing {
            center,
            size,
            viewport: Viewport {
                x_min: center.0 - half,
                x_max: center.0 + half,
                y_min: center.1 - half,
                y_max: center.1 + half,
            },
        }
    }
}
