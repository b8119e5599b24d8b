//! Utility functions for image loading and conversion.

use crate::core::{ScanError, ScanResult};
use image::{DynamicImage, GrayImage, ImageBuffer, RgbImage};

/// Converts a DynamicImage to an RgbImage.
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Converts a DynamicImage to a GrayImage.
pub fn dynamic_to_gray(img: DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Loads an image from a file path and converts it to RgbImage.
///
/// Any format supported by the image crate is accepted.
///
/// # Errors
///
/// Returns `ScanError::ImageLoad` if the image cannot be opened or decoded.
pub fn load_image(path: &std::path::Path) -> ScanResult<RgbImage> {
    let img = image::open(path).map_err(ScanError::ImageLoad)?;
    Ok(dynamic_to_rgb(img))
}

/// Creates an RgbImage from raw pixel data.
///
/// The data must be in RGB format (3 bytes per pixel) and its length must
/// match the specified dimensions; otherwise `None` is returned.
pub fn create_rgb_image(width: u32, height: u32, data: Vec<u8>) -> Option<RgbImage> {
    if data.len() != (width * height * 3) as usize {
        return None;
    }

    ImageBuffer::from_raw(width, height, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rgb_image_checks_length() {
        assert!(create_rgb_image(2, 2, vec![0u8; 12]).is_some());
        assert!(create_rgb_image(2, 2, vec![0u8; 11]).is_none());
    }

    #[test]
    fn test_dynamic_conversions_preserve_dimensions() {
        let dynamic = DynamicImage::new_rgb8(7, 5);
        assert_eq!(dynamic_to_rgb(dynamic.clone()).dimensions(), (7, 5));
        assert_eq!(dynamic_to_gray(dynamic).dimensions(), (7, 5));
    }

    #[test]
    fn test_load_image_missing_file_errors() {
        let result = load_image(std::path::Path::new("definitely/not/here.png"));
        assert!(matches!(result, Err(ScanError::ImageLoad(_))));
    }
}
