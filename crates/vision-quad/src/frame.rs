use serde::{Deserialize, Serialize};
use vision_quad_core::Point;
use vision_quad_heal::{line_up_within, merge, HealParams, Quadrilateral};

#[cfg(feature = "tracing")]
use tracing::instrument;

/// Contour candidates extracted from one camera frame.
///
/// Each contour is the raw polygon approximation of one reflective region,
/// in image pixel coordinates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameContours {
    pub contours: Vec<Vec<Point>>,
}

/// Output of [`process_frame`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct FrameReport {
    /// Number of contour candidates in the frame.
    pub candidate_count: usize,
    /// One healed quad per candidate, in input order.
    pub quads: Vec<Quadrilateral>,
    /// Join of the two candidates when exactly two were found and they line up.
    pub merged: Option<Quadrilateral>,
}

impl FrameReport {
    /// The quad downstream aiming should use, if the frame has one.
    ///
    /// Prefers the merged quad; otherwise a lone candidate. A denaturated
    /// quad is never returned.
    pub fn usable_target(&self) -> Option<&Quadrilateral> {
        let target = match (&self.merged, self.quads.as_slice()) {
            (Some(m), _) => m,
            (None, [only]) => only,
            _ => return None,
        };
        (!target.is_denaturated()).then_some(target)
    }
}

fn heal_contour(raw: &[Point], params: &HealParams) -> Quadrilateral {
    if params.snap_to_pixel {
        Quadrilateral::heal_subpixel(raw)
    } else {
        Quadrilateral::heal(raw)
    }
}

/// Heal every contour of a frame and merge a split target.
///
/// Merging is only attempted for exactly two candidates; anything else is
/// left for the caller to sort out.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(frame, params), fields(contours = frame.contours.len()))
)]
pub fn process_frame(frame: &FrameContours, params: &HealParams) -> FrameReport {
    let quads: Vec<Quadrilateral> = frame
        .contours
        .iter()
        .map(|c| heal_contour(c, params))
        .collect();

    let merged = match quads.as_slice() {
        [a, b] if line_up_within(a, b, params.align_tolerance_px) => Some(merge(a, b)),
        [a, b] => {
            log::debug!(
                "two candidates not aligned (centers {:?} / {:?})",
                a.center(),
                b.center()
            );
            None
        }
        _ => None,
    };

    if log::log_enabled!(log::Level::Debug) {
        for q in &quads {
            q.log_corners();
        }
    }
    let denaturated = quads.iter().filter(|q| q.is_denaturated()).count();
    log::debug!(
        "frame: {} candidates, {} denaturated, merged = {}",
        quads.len(),
        denaturated,
        merged.is_some()
    );

    FrameReport {
        candidate_count: frame.contours.len(),
        quads,
        merged,
    }
}
