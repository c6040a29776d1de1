use vision_quad_core::Quadrant;

use crate::params::DEFAULT_ALIGN_TOLERANCE_PX;
use crate::quadrilateral::{Corners, Quadrilateral, MERGE_ORDER};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// `true` when the two quads are stacked vertically, i.e. their centers are
/// less than [`DEFAULT_ALIGN_TOLERANCE_PX`] apart along x.
///
/// This is the gate callers check before [`merge`]; merge itself does not
/// enforce it.
pub fn line_up(q1: &Quadrilateral, q2: &Quadrilateral) -> bool {
    line_up_within(q1, q2, DEFAULT_ALIGN_TOLERANCE_PX)
}

/// [`line_up`] with an explicit tolerance (exclusive, pixels).
///
/// A quad without corners has no center. Two such quads are treated as
/// coincident (zero offset); one of them never lines up with a quad that has
/// a center.
pub fn line_up_within(q1: &Quadrilateral, q2: &Quadrilateral, tolerance_px: i32) -> bool {
    match (q1.center(), q2.center()) {
        (Some(c1), Some(c2)) => {
            (i64::from(c1.x) - i64::from(c2.x)).abs() < i64::from(tolerance_px)
        }
        (None, None) => 0 < tolerance_px,
        _ => false,
    }
}

/// Whether `a` sits strictly below `b` (larger center y).
fn is_lower(a: &Quadrilateral, b: &Quadrilateral) -> bool {
    match (a.center(), b.center()) {
        (Some(ca), Some(cb)) => ca.y > cb.y,
        (Some(_), None) => true,
        _ => false,
    }
}

/// Join two halves of one target into a single quad.
///
/// The lower half (larger center y) contributes the bottom corners, the other
/// one the top corners. When both centers share the same y, `q2` is taken as
/// the lower half. The merged polygon is ordered BL, BR, TL, TR.
///
/// Inputs are left untouched and their denaturated flags are not consulted;
/// the result is denaturated only if one of its own four slots is absent.
#[cfg_attr(feature = "tracing", instrument(level = "debug", skip(q1, q2)))]
pub fn merge(q1: &Quadrilateral, q2: &Quadrilateral) -> Quadrilateral {
    let (lower, upper) = if is_lower(q1, q2) { (q1, q2) } else { (q2, q1) };

    let corners = Corners {
        top_left: upper.corner(Quadrant::TopLeft),
        top_right: upper.corner(Quadrant::TopRight),
        bottom_right: lower.corner(Quadrant::BottomRight),
        bottom_left: lower.corner(Quadrant::BottomLeft),
    };
    let denaturated = corners.complete().is_none();
    log::debug!(
        "merging halves: upper center {:?}, lower center {:?}",
        upper.center(),
        lower.center()
    );

    Quadrilateral::assemble(corners, &MERGE_ORDER, denaturated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point2;
    use proptest::prelude::*;
    use vision_quad_core::Point;

    fn rect_quad(x0: f64, y0: f64, x1: f64, y1: f64) -> Quadrilateral {
        Quadrilateral::heal(&[
            Point::new(x0, y0),
            Point::new(x1, y0),
            Point::new(x1, y1),
            Point::new(x0, y1),
        ])
    }

    #[test]
    fn stacked_halves_line_up_and_merge() {
        // Upper half centered at (50, 20), lower half at (52, 80).
        let upper = rect_quad(40.0, 10.0, 60.0, 30.0);
        let lower = rect_quad(42.0, 70.0, 62.0, 90.0);
        assert_eq!(upper.center(), Some(Point2::new(50, 20)));
        assert_eq!(lower.center(), Some(Point2::new(52, 80)));
        assert!(line_up(&upper, &lower));

        let merged = merge(&upper, &lower);
        assert!(!merged.is_denaturated());
        assert_eq!(merged.top_left(), Some(Point::new(40.0, 10.0)));
        assert_eq!(merged.top_right(), Some(Point::new(60.0, 10.0)));
        assert_eq!(merged.bottom_right(), Some(Point::new(62.0, 90.0)));
        assert_eq!(merged.bottom_left(), Some(Point::new(42.0, 90.0)));
        assert_eq!(
            merged.polygon(),
            &[
                Point::new(42.0, 90.0),
                Point::new(62.0, 90.0),
                Point::new(40.0, 10.0),
                Point::new(60.0, 10.0),
            ]
        );
        let r = merged.bounding_rect().expect("rect");
        assert_eq!((r.x, r.y, r.width, r.height), (40, 10, 23, 81));
    }

    #[test]
    fn merge_leaves_inputs_untouched() {
        let upper = rect_quad(0.0, 0.0, 10.0, 10.0);
        let lower = rect_quad(0.0, 40.0, 10.0, 50.0);
        let (u0, l0) = (upper.clone(), lower.clone());
        let _ = merge(&upper, &lower);
        assert_eq!(upper, u0);
        assert_eq!(lower, l0);
    }

    #[test]
    fn misaligned_centers_do_not_line_up() {
        let a = rect_quad(0.0, 0.0, 10.0, 10.0);
        let b = rect_quad(5.0, 40.0, 15.0, 50.0);
        assert!(!line_up(&a, &b));
        assert!(line_up_within(&a, &b, 6));
    }

    #[test]
    fn empty_quad_lines_up_only_with_another_empty_quad() {
        let empty = Quadrilateral::heal(&[]);
        let q = rect_quad(0.0, 0.0, 10.0, 10.0);
        assert!(line_up(&empty, &empty));
        assert!(line_up(&empty, &Quadrilateral::heal(&[])));
        assert!(!line_up(&empty, &q));
        assert!(!line_up(&q, &empty));
    }

    #[test]
    fn far_apart_centers_do_not_overflow() {
        let left = Quadrilateral::heal(&[
            Point::new(-3e9, 0.0),
            Point::new(-3e9 + 10.0, 0.0),
            Point::new(-3e9 + 10.0, 10.0),
            Point::new(-3e9, 10.0),
        ]);
        let right = rect_quad(3e9, 0.0, 3e9 + 10.0, 10.0);
        assert!(!line_up(&left, &right));
        assert!(!line_up_within(&left, &right, i32::MAX));
        assert!(line_up(&left, &left));
    }

    #[test]
    fn merge_ignores_input_denaturation() {
        // Upper half lost its bottom-left, which merge never reads.
        let upper = Quadrilateral::heal(&[
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]);
        assert!(upper.is_denaturated());
        let lower = rect_quad(0.0, 40.0, 10.0, 50.0);
        let merged = merge(&upper, &lower);
        assert!(!merged.is_denaturated());
        assert_eq!(merged.corners().count(), 4);
    }

    #[test]
    fn missing_contributed_corner_denaturates_result() {
        // Lower half has no bottom-right.
        let upper = rect_quad(0.0, 0.0, 10.0, 10.0);
        let lower = Quadrilateral::heal(&[
            Point::new(0.0, 40.0),
            Point::new(10.0, 40.0),
            Point::new(0.0, 50.0),
        ]);
        let merged = merge(&upper, &lower);
        assert!(merged.is_denaturated());
        assert_eq!(merged.bottom_right(), None);
        assert_eq!(merged.polygon().len(), 3);
    }

    #[test]
    fn equal_center_y_takes_second_as_lower() {
        let a = rect_quad(0.0, 0.0, 10.0, 10.0);
        let b = rect_quad(100.0, 0.0, 110.0, 10.0);
        let merged = merge(&a, &b);
        assert_eq!(merged.top_left(), Some(Point::new(0.0, 0.0)));
        assert_eq!(merged.bottom_left(), Some(Point::new(100.0, 10.0)));
    }

    proptest! {
        #[test]
        fn prop_quad_lines_up_with_itself(
            x0 in -500.0..500.0f64,
            y0 in -500.0..500.0f64,
            w in 1.0..200.0f64,
            h in 1.0..200.0f64,
        ) {
            let q = rect_quad(x0, y0, x0 + w, y0 + h);
            prop_assert!(line_up(&q, &q));
        }

        #[test]
        fn prop_degenerate_quad_lines_up_with_itself(
            raw in prop::collection::vec((-500.0..500.0f64, -500.0..500.0f64), 0..4),
        ) {
            let pts: Vec<Point> = raw.iter().map(|&(x, y)| Point::new(x, y)).collect();
            let q = Quadrilateral::heal(&pts);
            prop_assert!(line_up(&q, &q));
        }

        #[test]
        fn prop_merge_is_symmetric_for_distinct_heights(
            ax in -500.0..500.0f64,
            ay in -500.0..500.0f64,
            bx in -500.0..500.0f64,
            by in -500.0..500.0f64,
            w in 2.0..100.0f64,
            h in 2.0..100.0f64,
        ) {
            let a = rect_quad(ax, ay, ax + w, ay + h);
            let b = rect_quad(bx, by, bx + w, by + h);
            prop_assume!(a.center().map(|c| c.y) != b.center().map(|c| c.y));
            prop_assert_eq!(merge(&a, &b), merge(&b, &a));
        }
    }
}
