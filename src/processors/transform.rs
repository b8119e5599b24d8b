//! Perspective rectification for detected document boundaries.
//!
//! This module computes the projective transform that maps a detected
//! quadrilateral onto an axis-aligned rectangle and resamples the source
//! image through it, producing the flat top-down crop of the page.

use crate::core::{ScanError, ScanResult};
use crate::processors::geometry::{Point, Quad};
use image::{Rgb, RgbImage};
use nalgebra::{Matrix3, Vector3};
use rayon::prelude::*;
use tracing::debug;

/// Calculates the Euclidean distance between two points.
fn distance(p1: &Point, p2: &Point) -> f32 {
    (p1.x - p2.x).hypot(p1.y - p2.y)
}

/// Rectifies the quadrilateral region of an image into a flat crop.
///
/// The target width is the larger of the two horizontal edge lengths and the
/// target height the larger of the two vertical edge lengths, both rounded
/// down, so the crop keeps the pixel density of the longer measured edge
/// pair. The source image is not mutated; a new owned image is returned.
///
/// # Arguments
///
/// * `src_image` - The source image to sample from
/// * `quad` - The document boundary with corners in canonical order
/// * `min_side` - Minimum allowed crop side length
///
/// # Errors
///
/// Returns `ScanError::DegenerateGeometry` if the computed crop is smaller
/// than `min_side` in either dimension (near-zero area or collinear
/// corners), and `ScanError::InvalidInput` if the projective transform
/// cannot be solved or inverted.
pub fn rectify(src_image: &RgbImage, quad: &Quad, min_side: u32) -> ScanResult<RgbImage> {
    let tl = quad.top_left();
    let tr = quad.top_right();
    let br = quad.bottom_right();
    let bl = quad.bottom_left();

    let width = distance(&bl, &br).max(distance(&tl, &tr)).floor() as u32;
    let height = distance(&tl, &bl).max(distance(&tr, &br)).floor() as u32;

    if width < min_side || height < min_side {
        return Err(ScanError::DegenerateGeometry { width, height });
    }

    let dst_points = [
        Point::new(0.0, 0.0),
        Point::new((width - 1) as f32, 0.0),
        Point::new((width - 1) as f32, (height - 1) as f32),
        Point::new(0.0, (height - 1) as f32),
    ];

    let transform_matrix = get_perspective_transform(quad.points(), &dst_points)?;

    debug!(width, height, "rectifying document region");
    warp_perspective(src_image, &transform_matrix, width, height)
}

/// Calculates the perspective transformation matrix that maps four source
/// points to four destination points.
///
/// The eight transform parameters are found by solving the linear system
/// built from the four point correspondences.
///
/// # Errors
///
/// Returns `ScanError::InvalidInput` if the linear system cannot be solved
/// (the correspondences are degenerate).
fn get_perspective_transform(
    src_points: &[Point; 4],
    dst_points: &[Point; 4],
) -> ScanResult<Matrix3<f32>> {
    let mut a = nalgebra::DMatrix::<f32>::zeros(8, 8);
    let mut b = nalgebra::DVector::<f32>::zeros(8);

    for i in 0..4 {
        let src = &src_points[i];
        let dst = &dst_points[i];

        a.set_row(
            i * 2,
            &nalgebra::RowDVector::from_row_slice(&[
                src.x,
                src.y,
                1.0,
                0.0,
                0.0,
                0.0,
                -src.x * dst.x,
                -src.y * dst.x,
            ]),
        );
        b[i * 2] = dst.x;

        a.set_row(
            i * 2 + 1,
            &nalgebra::RowDVector::from_row_slice(&[
                0.0,
                0.0,
                0.0,
                src.x,
                src.y,
                1.0,
                -src.x * dst.y,
                -src.y * dst.y,
            ]),
        );
        b[i * 2 + 1] = dst.y;
    }

    let decomp = a.lu();
    let solution = decomp.solve(&b).ok_or_else(|| {
        ScanError::invalid_input("cannot solve perspective transformation")
    })?;

    Ok(Matrix3::new(
        solution[0],
        solution[1],
        solution[2],
        solution[3],
        solution[4],
        solution[5],
        solution[6],
        solution[7],
        1.0,
    ))
}

/// Applies a perspective transformation to an image.
///
/// Uses inverse mapping with bilinear interpolation: each destination pixel
/// is projected back into the source image through the inverted matrix.
/// Destination rows are processed in parallel.
///
/// # Errors
///
/// Returns `ScanError::InvalidInput` if the transformation matrix cannot be
/// inverted.
fn warp_perspective(
    src_image: &RgbImage,
    transform_matrix: &Matrix3<f32>,
    dst_width: u32,
    dst_height: u32,
) -> ScanResult<RgbImage> {
    let inv_matrix = transform_matrix
        .try_inverse()
        .ok_or_else(|| ScanError::invalid_input("cannot invert transformation matrix"))?;

    let mut dst_image = RgbImage::new(dst_width, dst_height);
    let (src_width, src_height) = src_image.dimensions();
    let buffer: &mut [u8] = dst_image.as_mut();

    buffer
        .par_chunks_mut((dst_width * 3) as usize)
        .enumerate()
        .for_each(|(dst_y, row_buffer)| {
            for dst_x in 0..dst_width {
                let dst_point = Vector3::new(dst_x as f32, dst_y as f32, 1.0);
                let src_point = inv_matrix * dst_point;

                let mut final_pixel = Rgb([0, 0, 0]);

                if src_point.z.abs() > f32::EPSILON {
                    let src_x = src_point.x / src_point.z;
                    let src_y = src_point.y / src_point.z;

                    if src_x >= 0.0
                        && src_y >= 0.0
                        && src_x < (src_width - 1) as f32
                        && src_y < (src_height - 1) as f32
                    {
                        final_pixel = bilinear_interpolate(src_image, src_x, src_y);
                    }
                }

                let index = (dst_x * 3) as usize;
                row_buffer[index..index + 3].copy_from_slice(&final_pixel.0);
            }
        });

    Ok(dst_image)
}

/// Performs bilinear interpolation to get a pixel value at non-integer
/// coordinates, blending the four nearest pixels.
fn bilinear_interpolate(image: &RgbImage, x: f32, y: f32) -> Rgb<u8> {
    let x1 = x.floor() as u32;
    let y1 = y.floor() as u32;
    let x2 = (x1 + 1).min(image.width() - 1);
    let y2 = (y1 + 1).min(image.height() - 1);

    let dx = x - x1 as f32;
    let dy = y - y1 as f32;

    let p11 = image.get_pixel(x1, y1);
    let p12 = image.get_pixel(x1, y2);
    let p21 = image.get_pixel(x2, y1);
    let p22 = image.get_pixel(x2, y2);

    let mut result = [0u8; 3];
    for (i, result_channel) in result.iter_mut().enumerate() {
        let val = (1.0 - dx) * (1.0 - dy) * p11.0[i] as f32
            + dx * (1.0 - dy) * p21.0[i] as f32
            + (1.0 - dx) * dy * p12.0[i] as f32
            + dx * dy * p22.0[i] as f32;
        *result_channel = val.round().clamp(0.0, 255.0) as u8;
    }

    Rgb(result)
}
