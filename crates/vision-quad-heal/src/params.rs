use serde::{Deserialize, Serialize};

/// Maximum horizontal center offset (exclusive, pixels) for two halves to
/// count as one target.
pub const DEFAULT_ALIGN_TOLERANCE_PX: i32 = 5;

/// Tunables for per-frame healing and merging.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealParams {
    /// Two quads line up when their centers differ by strictly less than
    /// this many pixels along x.
    pub align_tolerance_px: i32,
    /// Snap contour vertices to the integer pixel grid before healing.
    pub snap_to_pixel: bool,
}

impl Default for HealParams {
    fn default() -> Self {
        Self {
            align_tolerance_px: DEFAULT_ALIGN_TOLERANCE_PX,
            snap_to_pixel: false,
        }
    }
}
