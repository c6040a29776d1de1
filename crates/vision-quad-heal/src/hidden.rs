use vision_quad_core::{Point, Quadrant};

/// Which of the two candidates supplies a coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pick {
    /// The candidate with the smaller `y` (higher in the image).
    Higher,
    /// The candidate with the larger `y` (lower in the image).
    Lower,
}

#[derive(Clone, Copy, Debug)]
struct HiddenRule {
    x: Pick,
    y: Pick,
}

/// Indexed by [`Quadrant::index`].
const HIDDEN_RULES: [HiddenRule; 4] = [
    // top-left
    HiddenRule {
        x: Pick::Higher,
        y: Pick::Lower,
    },
    // top-right
    HiddenRule {
        x: Pick::Higher,
        y: Pick::Lower,
    },
    // bottom-right
    HiddenRule {
        x: Pick::Lower,
        y: Pick::Higher,
    },
    // bottom-left
    HiddenRule {
        x: Pick::Lower,
        y: Pick::Higher,
    },
];

/// Synthesize the corner hidden behind an occlusion notch.
///
/// `a` and `b` are the two candidates found in `quadrant`. The result mixes
/// their coordinates according to the per-quadrant rule:
///
/// | quadrant          | x from          | y from          |
/// |-------------------|-----------------|-----------------|
/// | top-left/right    | higher (min y)  | lower (max y)   |
/// | bottom-left/right | lower (max y)   | higher (min y)  |
///
/// The result does not depend on argument order unless `a.y == b.y`. On an
/// exact tie `a` is taken as the higher point and `b` as the lower one; `y`
/// is the same either way, only `x` follows this convention.
pub fn reconstruct_hidden(quadrant: Quadrant, a: &Point, b: &Point) -> Point {
    let (higher, lower) = if b.y < a.y { (b, a) } else { (a, b) };
    let rule = HIDDEN_RULES[quadrant.index()];
    let pick = |p: Pick| match p {
        Pick::Higher => higher,
        Pick::Lower => lower,
    };
    Point::new(pick(rule.x).x, pick(rule.y).y)
}
