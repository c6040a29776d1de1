use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::Point;

/// Axis-aligned rectangle on the integer pixel grid.
///
/// Extents are inclusive: a rectangle spanning pixel columns `0..=10` has
/// `x = 0, width = 11`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    /// Bounding rectangle of a point set.
    ///
    /// Coordinates are floored onto the pixel grid before taking extents.
    /// Values outside the `i32` range (including infinities) saturate to
    /// `i32::MIN` / `i32::MAX`, NaN maps to 0, and an extent too large for
    /// `i32` saturates to `i32::MAX`.
    /// Returns `None` for an empty set: there is no meaningful rectangle (or
    /// center) for zero points, and callers must handle that explicitly.
    pub fn bounding(points: &[Point]) -> Option<PixelRect> {
        let (first, rest) = points.split_first()?;
        let mut min_x = first.x.floor() as i32;
        let mut min_y = first.y.floor() as i32;
        let mut max_x = min_x;
        let mut max_y = min_y;

        for p in rest {
            let x = p.x.floor() as i32;
            let y = p.y.floor() as i32;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        Some(PixelRect {
            x: min_x,
            y: min_y,
            width: saturate(i64::from(max_x) - i64::from(min_x) + 1),
            height: saturate(i64::from(max_y) - i64::from(min_y) + 1),
        })
    }

    /// Center with truncating integer division, `(x + w/2, y + h/2)`.
    #[inline]
    pub fn center(&self) -> Point2<i32> {
        Point2::new(
            saturate(i64::from(self.x) + i64::from(self.width) / 2),
            saturate(i64::from(self.y) + i64::from(self.height) / 2),
        )
    }
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Snap a sub-pixel point to the nearest integer pixel (half away from zero).
#[inline]
pub fn round_to_pixel(p: &Point) -> Point {
    Point::new(p.x.round(), p.y.round())
}
