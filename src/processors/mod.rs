//! Image processing utilities for document scanning.
//!
//! # Modules
//!
//! * `edges` - Edge-map extraction (grayscale, blur, Canny)
//! * `geometry` - Points, polygons, and quadrilateral corner ordering
//! * `transform` - Perspective transform and rectification

pub mod edges;
pub mod geometry;
pub mod transform;

pub use edges::edge_map;
pub use geometry::{Point, Polygon, Quad};
pub use transform::rectify;
