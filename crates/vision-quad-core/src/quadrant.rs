use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::Point;

/// One of the four image regions split by a classification center.
///
/// Image coordinates: `y` grows downward, so "top" means smaller `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
}

/// All quadrants in corner order (clockwise from top-left).
pub const QUADRANTS: [Quadrant; 4] = [
    Quadrant::TopLeft,
    Quadrant::TopRight,
    Quadrant::BottomRight,
    Quadrant::BottomLeft,
];

impl Quadrant {
    /// Classify `p` relative to `center`.
    ///
    /// Both tests are strict: `x > center.x` is right, `y > center.y` is
    /// bottom. A point exactly on a split line therefore lands on the
    /// left / top side; this is the canonical tie-break.
    #[inline]
    pub fn classify(p: &Point, center: Point2<i32>) -> Quadrant {
        let right = p.x > f64::from(center.x);
        let bottom = p.y > f64::from(center.y);
        match (right, bottom) {
            (false, false) => Quadrant::TopLeft,
            (true, false) => Quadrant::TopRight,
            (true, true) => Quadrant::BottomRight,
            (false, true) => Quadrant::BottomLeft,
        }
    }

    /// Position of this quadrant in [`QUADRANTS`].
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Quadrant::TopLeft => 0,
            Quadrant::TopRight => 1,
            Quadrant::BottomRight => 2,
            Quadrant::BottomLeft => 3,
        }
    }
}
