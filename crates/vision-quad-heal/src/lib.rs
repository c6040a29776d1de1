//! Reflective-target quadrilateral healing.
//!
//! Pipeline:
//! - Bucket the raw contour vertices into quadrants around the bounding-box
//!   center of the raw set.
//! - A quadrant with one vertex keeps it as the corner; a quadrant with two
//!   vertices (an occlusion notch) is resolved into a synthetic hidden corner.
//! - Any other count marks the result *denaturated* and leaves the corner
//!   absent. Callers must check [`Quadrilateral::is_denaturated`] before
//!   trusting corners.
//! - Two healed halves of one target can be joined with [`merge`] once
//!   [`line_up`] confirms they are stacked vertically.

mod heal;
mod hidden;
mod merge;
mod params;
mod quadrilateral;

pub use heal::{classify_vertices, QuadrantBuckets};
pub use hidden::reconstruct_hidden;
pub use merge::{line_up, line_up_within, merge};
pub use params::{HealParams, DEFAULT_ALIGN_TOLERANCE_PX};
pub use quadrilateral::{Corners, Quadrilateral, HEAL_ORDER, MERGE_ORDER};

pub use vision_quad_core::{PixelRect, Point, Quadrant};
