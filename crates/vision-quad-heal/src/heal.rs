use vision_quad_core::{PixelRect, Point, Quadrant, QUADRANTS};

use crate::hidden::reconstruct_hidden;
use crate::quadrilateral::Corners;

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Raw vertices grouped by quadrant, indexed by [`Quadrant::index`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QuadrantBuckets {
    buckets: [Vec<Point>; 4],
}

impl QuadrantBuckets {
    pub fn get(&self, quadrant: Quadrant) -> &[Point] {
        &self.buckets[quadrant.index()]
    }

    pub fn len(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Bucket `raw` into quadrants around the center of its own bounding box.
///
/// Input order is preserved within each bucket. An empty input produces
/// four empty buckets.
pub fn classify_vertices(raw: &[Point]) -> QuadrantBuckets {
    let mut out = QuadrantBuckets::default();
    let Some(rect) = PixelRect::bounding(raw) else {
        return out;
    };
    let center = rect.center();

    for p in raw {
        let q = Quadrant::classify(p, center);
        out.buckets[q.index()].push(*p);
    }
    out
}

/// Resolve every bucket into a corner slot.
///
/// Returns the corners and the denaturated flag. Each quadrant is handled
/// independently, so a bad bucket only clears its own slot.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "debug", skip(buckets), fields(vertices = buckets.len()))
)]
pub(crate) fn heal_buckets(buckets: &QuadrantBuckets) -> (Corners, bool) {
    let mut corners = Corners::default();
    let mut denaturated = false;

    for q in QUADRANTS {
        match buckets.get(q) {
            [p] => corners.set(q, *p),
            [a, b] => {
                let hidden = reconstruct_hidden(q, a, b);
                log::debug!(
                    "{q:?}: hidden corner ({}, {}) from two candidates",
                    hidden.x,
                    hidden.y
                );
                corners.set(q, hidden);
            }
            other => {
                log::debug!("{q:?}: {} candidates, marking denaturated", other.len());
                denaturated = true;
            }
        }
    }

    (corners, denaturated)
}
