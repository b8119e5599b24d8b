//! Constants used throughout the document scanning pipeline.
//!
//! This module defines the default tuning values for document boundary
//! detection. They can be overridden through
//! [`DetectorConfig`](crate::core::DetectorConfig).

/// The default sigma for the Gaussian blur applied before edge detection.
///
/// This value approximates a 5x5 Gaussian kernel and suppresses
/// high-frequency noise that would otherwise fragment the edge map.
pub const DEFAULT_BLUR_SIGMA: f32 = 1.1;

/// The default lower threshold for Canny edge detection.
pub const DEFAULT_CANNY_LOW: f32 = 75.0;

/// The default upper threshold for Canny edge detection.
pub const DEFAULT_CANNY_HIGH: f32 = 200.0;

/// The default maximum number of contour candidates to examine.
///
/// Only the largest contours by enclosed area are plausible full-page
/// boundaries; bounding the candidate list also bounds the cost of
/// polygon simplification.
pub const DEFAULT_MAX_CANDIDATES: usize = 5;

/// The default polygon simplification tolerance, as a fraction of the
/// contour perimeter.
pub const DEFAULT_APPROX_EPSILON_RATIO: f32 = 0.02;

/// The default minimum side length for a rectified crop.
///
/// Quadrilaterals whose computed crop would fall below this floor in
/// either dimension are rejected as degenerate.
pub const DEFAULT_MIN_CROP_SIDE: u32 = 2;
