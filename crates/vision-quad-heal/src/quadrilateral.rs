use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use vision_quad_core::{round_to_pixel, PixelRect, Point, Quadrant};

use crate::heal::{classify_vertices, heal_buckets};

/// Polygon order of a healed quad: clockwise from top-left.
pub const HEAL_ORDER: [Quadrant; 4] = [
    Quadrant::TopLeft,
    Quadrant::TopRight,
    Quadrant::BottomRight,
    Quadrant::BottomLeft,
];

/// Polygon order of a merged quad: bottom pair first, then top pair.
pub const MERGE_ORDER: [Quadrant; 4] = [
    Quadrant::BottomLeft,
    Quadrant::BottomRight,
    Quadrant::TopLeft,
    Quadrant::TopRight,
];

/// Four named corner slots, each either resolved or absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Corners {
    pub top_left: Option<Point>,
    pub top_right: Option<Point>,
    pub bottom_right: Option<Point>,
    pub bottom_left: Option<Point>,
}

impl Corners {
    #[inline]
    pub fn get(&self, quadrant: Quadrant) -> Option<Point> {
        match quadrant {
            Quadrant::TopLeft => self.top_left,
            Quadrant::TopRight => self.top_right,
            Quadrant::BottomRight => self.bottom_right,
            Quadrant::BottomLeft => self.bottom_left,
        }
    }

    pub(crate) fn set(&mut self, quadrant: Quadrant, p: Point) {
        let slot = match quadrant {
            Quadrant::TopLeft => &mut self.top_left,
            Quadrant::TopRight => &mut self.top_right,
            Quadrant::BottomRight => &mut self.bottom_right,
            Quadrant::BottomLeft => &mut self.bottom_left,
        };
        *slot = Some(p);
    }

    /// Number of resolved corners.
    pub fn count(&self) -> usize {
        HEAL_ORDER.iter().filter(|q| self.get(**q).is_some()).count()
    }

    /// All four corners as `[TL, TR, BR, BL]` when every slot is resolved.
    pub fn complete(&self) -> Option<[Point; 4]> {
        Some([
            self.top_left?,
            self.top_right?,
            self.bottom_right?,
            self.bottom_left?,
        ])
    }
}

/// A target outline reduced to (at most) four oriented corners.
///
/// Values are built once, either by healing a raw contour
/// ([`Quadrilateral::heal`]) or by joining two halves ([`crate::merge`]), and
/// are not mutated afterwards apart from the explicit
/// [`Quadrilateral::rederive_bounds`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Quadrilateral {
    corners: Corners,
    polygon: Vec<Point>,
    bounding_rect: Option<PixelRect>,
    denaturated: bool,
}

impl Quadrilateral {
    /// Heal a raw contour vertex list into a quadrilateral.
    ///
    /// Never fails: unusable input is reported through
    /// [`Quadrilateral::is_denaturated`].
    pub fn heal(raw: &[Point]) -> Self {
        let buckets = classify_vertices(raw);
        let (corners, denaturated) = heal_buckets(&buckets);
        Self::assemble(corners, &HEAL_ORDER, denaturated)
    }

    /// Heal a sub-pixel contour after snapping every vertex to the nearest
    /// integer pixel.
    pub fn heal_subpixel(raw: &[Point]) -> Self {
        let snapped: Vec<Point> = raw.iter().map(round_to_pixel).collect();
        Self::heal(&snapped)
    }

    /// Build the polygon from the present corners in `order` and derive the
    /// bounding rectangle from it.
    pub(crate) fn assemble(corners: Corners, order: &[Quadrant; 4], denaturated: bool) -> Self {
        let polygon: Vec<Point> = order.iter().filter_map(|q| corners.get(*q)).collect();
        let mut quad = Self {
            corners,
            polygon,
            bounding_rect: None,
            denaturated,
        };
        quad.rederive_bounds();
        quad
    }

    /// Recompute the bounding rectangle from the current polygon.
    ///
    /// An empty polygon has no rectangle; [`Quadrilateral::bounding_rect`]
    /// then returns `None` rather than a zero-sized placeholder.
    pub fn rederive_bounds(&mut self) {
        self.bounding_rect = PixelRect::bounding(&self.polygon);
    }

    pub fn corners(&self) -> &Corners {
        &self.corners
    }

    #[inline]
    pub fn corner(&self, quadrant: Quadrant) -> Option<Point> {
        self.corners.get(quadrant)
    }

    pub fn top_left(&self) -> Option<Point> {
        self.corners.top_left
    }

    pub fn top_right(&self) -> Option<Point> {
        self.corners.top_right
    }

    pub fn bottom_right(&self) -> Option<Point> {
        self.corners.bottom_right
    }

    pub fn bottom_left(&self) -> Option<Point> {
        self.corners.bottom_left
    }

    /// Present corners in construction order (see [`HEAL_ORDER`] and
    /// [`MERGE_ORDER`]).
    pub fn polygon(&self) -> &[Point] {
        &self.polygon
    }

    pub fn bounding_rect(&self) -> Option<PixelRect> {
        self.bounding_rect
    }

    /// `true` when at least one corner could not be resolved.
    pub fn is_denaturated(&self) -> bool {
        self.denaturated
    }

    pub fn width(&self) -> i32 {
        self.bounding_rect.map_or(0, |r| r.width)
    }

    pub fn height(&self) -> i32 {
        self.bounding_rect.map_or(0, |r| r.height)
    }

    /// Center of the current bounding rectangle, recomputed on every call.
    pub fn center(&self) -> Option<Point2<i32>> {
        self.bounding_rect.map(|r| r.center())
    }

    /// Dump the polygon vertices at debug level.
    pub fn log_polygon(&self) {
        for (i, p) in self.polygon.iter().enumerate() {
            log::debug!("polygon[{i}]: x = {}, y = {}", p.x, p.y);
        }
    }

    /// Dump the oriented corners at debug level.
    pub fn log_corners(&self) {
        for q in HEAL_ORDER {
            match self.corners.get(q) {
                Some(p) => log::debug!("{q:?}: x = {}, y = {}", p.x, p.y),
                None => log::debug!("{q:?}: absent"),
            }
        }
    }
}
