//! High-level facade crate for the `vision-quad-*` workspace.
//!
//! This crate provides:
//! - re-exports of the geometry core and the healing crate
//! - per-frame processing: heal every contour candidate, then join two
//!   vertically stacked halves of one target
//! - JSON I/O for frame inputs and reports, plus the `vision-quad` CLI
//!   (feature `cli`)
//!
//! ## Quickstart
//!
//! ```
//! use vision_quad::{process_frame, FrameContours, HealParams, Point};
//!
//! let frame = FrameContours {
//!     contours: vec![vec![
//!         Point::new(0.0, 0.0),
//!         Point::new(10.0, 0.0),
//!         Point::new(10.0, 10.0),
//!         Point::new(0.0, 10.0),
//!     ]],
//! };
//! let report = process_frame(&frame, &HealParams::default());
//! assert!(report.usable_target().is_some());
//! ```
//!
//! ## API map
//! - `vision_quad::core`: points, quadrants, pixel rectangles, logger setup.
//! - `vision_quad::heal`: healing, hidden-point reconstruction, merge.
//! - `vision_quad::frame`: per-frame driver and report.
//! - `vision_quad::io`: JSON loading and saving.

pub use vision_quad_core as core;
pub use vision_quad_heal as heal;

pub mod frame;
pub mod io;

pub use frame::{process_frame, FrameContours, FrameReport};
pub use io::{load_frame, load_params, write_report, FrameIoError};
pub use vision_quad_core::{PixelRect, Point, Quadrant};
pub use vision_quad_heal::{line_up, line_up_within, merge, HealParams, Quadrilateral};
