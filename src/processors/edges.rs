//! Edge-map extraction for document boundary detection.
//!
//! Produces the binary edge image that contour extraction runs on:
//! grayscale conversion, Gaussian smoothing to suppress high-frequency
//! noise, then Canny edge detection.

use crate::core::DetectorConfig;
use image::{GrayImage, RgbImage};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

/// Computes the binary edge map of an image.
///
/// All intermediate buffers (grayscale, blurred) are allocated fresh and
/// discarded; the input image is not mutated.
pub fn edge_map(image: &RgbImage, config: &DetectorConfig) -> GrayImage {
    let gray = image::imageops::grayscale(image);
    let blurred = gaussian_blur_f32(&gray, config.blur_sigma);
    canny(&blurred, config.canny_low, config.canny_high)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_uniform_image_has_no_edges() {
        let image = RgbImage::from_pixel(64, 64, Rgb([128, 128, 128]));
        let edges = edge_map(&image, &DetectorConfig::default());
        assert!(edges.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn test_high_contrast_boundary_produces_edges() {
        let mut image = RgbImage::from_pixel(64, 64, Rgb([0, 0, 0]));
        for y in 16..48 {
            for x in 16..48 {
                image.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }
        let edges = edge_map(&image, &DetectorConfig::default());
        assert!(edges.pixels().any(|p| p.0[0] > 0));
    }
}
