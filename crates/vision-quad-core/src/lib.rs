//! Core types for reflective-target corner reconstruction.
//!
//! This crate is intentionally small and purely geometric. It does *not*
//! depend on any contour extractor or image type: callers hand in raw
//! vertex lists in image pixel space.

mod logger;
mod quadrant;
mod rect;

pub use quadrant::{Quadrant, QUADRANTS};
pub use rect::{round_to_pixel, PixelRect};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;

/// Real-valued point in image pixel space (`x` right, `y` down).
pub type Point = nalgebra::Point2<f64>;
