//! Map geometry: bounding boxes, viewport framing and terminal rendering.

pub mod bounds;
pub mod raster;
pub mod viewport;

pub use bounds::BoundingBox;
pub use raster::{render, MapRaster};
pub use viewport::{Framing, Viewport, ViewportFramer, MIN_VIEW_EXTENT};
