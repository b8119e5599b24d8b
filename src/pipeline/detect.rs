//! Document boundary detection.
//!
//! Finds the most plausible page-like quadrilateral in an image and
//! produces the rectified crop. Detection never fails the pipeline: when no
//! candidate contour simplifies to a quadrilateral, the original image is
//! returned unchanged and downstream stages treat it as a valid, if
//! degraded, result.

use crate::core::{DetectorConfig, ScanResult};
use crate::processors::edges::edge_map;
use crate::processors::geometry::{Polygon, Quad};
use crate::processors::transform::rectify;
use image::RgbImage;
use imageproc::contours::{find_contours, BorderType};
use tracing::debug;

/// The outcome of document detection.
#[derive(Debug, Clone)]
pub struct Detection {
    /// The rectified crop, or a copy of the input when no document was found.
    pub image: RgbImage,
    /// The detected page boundary; `None` signals a detection miss.
    pub quad: Option<Quad>,
}

impl Detection {
    /// Whether a page boundary was found and rectified.
    pub fn document_found(&self) -> bool {
        self.quad.is_some()
    }
}

/// Detects a document in an image and rectifies it.
///
/// Candidate contours are taken from the Canny edge map, outer borders
/// only, ranked by enclosed area. The largest candidates (up to
/// `max_candidates`) are simplified with a tolerance of
/// `approx_epsilon_ratio` times their perimeter; the first that reduces to
/// exactly 4 vertices is taken as the page boundary and rectified. Area is
/// the tie-break, since the candidate list is pre-sorted descending.
///
/// This is a pure function of its input: repeated calls on the same image
/// return the same result, and no state is shared between calls.
///
/// # Errors
///
/// Returns `ScanError::DegenerateGeometry` if the winning quadrilateral
/// collapses below the configured minimum crop size. A detection miss is
/// not an error.
pub fn detect_document(image: &RgbImage, config: &DetectorConfig) -> ScanResult<Detection> {
    let edges = edge_map(image, config);

    let mut candidates: Vec<Polygon> = find_contours::<u32>(&edges)
        .iter()
        .filter(|contour| matches!(contour.border_type, BorderType::Outer))
        .map(Polygon::from_contour)
        .filter(|polygon| polygon.points.len() >= 4)
        .collect();

    candidates.sort_by(|a, b| {
        b.area()
            .partial_cmp(&a.area())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    candidates.truncate(config.max_candidates);

    for polygon in &candidates {
        let epsilon = config.approx_epsilon_ratio * polygon.perimeter();
        let approx = polygon.approx_poly_dp(epsilon);
        if approx.points.len() != 4 {
            continue;
        }

        let quad = Quad::from_unordered([
            approx.points[0],
            approx.points[1],
            approx.points[2],
            approx.points[3],
        ]);
        debug!(
            area = polygon.area(),
            vertices = polygon.points.len(),
            "document boundary candidate accepted"
        );
        let rectified = rectify(image, &quad, config.min_crop_side)?;
        return Ok(Detection {
            image: rectified,
            quad: Some(quad),
        });
    }

    debug!(
        candidates = candidates.len(),
        "no quadrilateral contour found, returning input unchanged"
    );
    Ok(Detection {
        image: image.clone(),
        quad: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn page_on_dark_background() -> RgbImage {
        let mut image = RgbImage::from_pixel(300, 200, Rgb([10, 10, 10]));
        for y in 30..170 {
            for x in 40..240 {
                image.put_pixel(x, y, Rgb([245, 245, 245]));
            }
        }
        image
    }

    #[test]
    fn test_detect_finds_and_crops_page() {
        let image = page_on_dark_background();
        let detection = detect_document(&image, &DetectorConfig::default()).unwrap();

        assert!(detection.document_found());
        let (width, height) = detection.image.dimensions();
        assert!(width <= 300 && height <= 200);
        // The crop should be close to the 200x140 page region.
        assert!((190..=210).contains(&width), "width was {width}");
        assert!((130..=150).contains(&height), "height was {height}");
    }

    #[test]
    fn test_detect_on_blank_image_returns_original() {
        let image = RgbImage::from_pixel(120, 90, Rgb([200, 200, 200]));
        let detection = detect_document(&image, &DetectorConfig::default()).unwrap();

        assert!(!detection.document_found());
        assert_eq!(detection.image.dimensions(), image.dimensions());
        assert_eq!(detection.image.as_raw(), image.as_raw());
    }
}
