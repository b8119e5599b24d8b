//! Utility functions for the document scanning pipeline.

pub mod image;

pub use image::{create_rgb_image, dynamic_to_gray, dynamic_to_rgb, load_image};
