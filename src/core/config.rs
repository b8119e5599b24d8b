//! Configuration for document boundary detection.
//!
//! The detector is tuned through [`DetectorConfig`], which carries the
//! blur, edge-detection, and polygon-simplification parameters. The
//! defaults reproduce the standard page-scanning setup; callers that
//! override them should run [`DetectorConfig::validate`] before use.

use crate::core::constants::{
    DEFAULT_APPROX_EPSILON_RATIO, DEFAULT_BLUR_SIGMA, DEFAULT_CANNY_HIGH, DEFAULT_CANNY_LOW,
    DEFAULT_MAX_CANDIDATES, DEFAULT_MIN_CROP_SIDE,
};
use crate::core::errors::{ScanError, ScanResult};
use serde::{Deserialize, Serialize};

/// Tuning parameters for the document detector.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Sigma for the Gaussian blur applied before edge detection.
    pub blur_sigma: f32,

    /// Lower threshold for Canny edge detection.
    pub canny_low: f32,

    /// Upper threshold for Canny edge detection.
    pub canny_high: f32,

    /// Maximum number of contour candidates to examine, largest-area first.
    pub max_candidates: usize,

    /// Polygon simplification tolerance as a fraction of contour perimeter.
    pub approx_epsilon_ratio: f32,

    /// Minimum side length for a rectified crop; smaller results are
    /// rejected as degenerate geometry.
    pub min_crop_side: u32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            blur_sigma: DEFAULT_BLUR_SIGMA,
            canny_low: DEFAULT_CANNY_LOW,
            canny_high: DEFAULT_CANNY_HIGH,
            max_candidates: DEFAULT_MAX_CANDIDATES,
            approx_epsilon_ratio: DEFAULT_APPROX_EPSILON_RATIO,
            min_crop_side: DEFAULT_MIN_CROP_SIDE,
        }
    }
}

impl DetectorConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns a `ScanError::Config` describing the first invalid field.
    pub fn validate(&self) -> ScanResult<()> {
        if !self.blur_sigma.is_finite() || self.blur_sigma <= 0.0 {
            return Err(ScanError::config_error_with_context(
                "blur_sigma",
                &self.blur_sigma.to_string(),
                "must be a positive finite number",
            ));
        }

        if !self.canny_low.is_finite() || self.canny_low <= 0.0 {
            return Err(ScanError::config_error_with_context(
                "canny_low",
                &self.canny_low.to_string(),
                "must be a positive finite number",
            ));
        }

        if !self.canny_high.is_finite() || self.canny_high <= self.canny_low {
            return Err(ScanError::config_error_with_context(
                "canny_high",
                &self.canny_high.to_string(),
                "must be finite and greater than canny_low",
            ));
        }

        if self.max_candidates == 0 {
            return Err(ScanError::config_error_with_context(
                "max_candidates",
                "0",
                "must be at least 1",
            ));
        }

        if !self.approx_epsilon_ratio.is_finite()
            || self.approx_epsilon_ratio <= 0.0
            || self.approx_epsilon_ratio >= 1.0
        {
            return Err(ScanError::config_error_with_context(
                "approx_epsilon_ratio",
                &self.approx_epsilon_ratio.to_string(),
                "must lie strictly between 0 and 1",
            ));
        }

        if self.min_crop_side < 2 {
            return Err(ScanError::config_error_with_context(
                "min_crop_side",
                &self.min_crop_side.to_string(),
                "must be at least 2",
            ));
        }

        Ok(())
    }
}
