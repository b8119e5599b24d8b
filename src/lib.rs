//! # docscan
//!
//! A Rust library for ad hoc digitization of paperwork: it locates a
//! rectangular document in a photographed or scanned image, rectifies its
//! perspective into a flat top-down view, and partitions text extracted by
//! an external OCR engine into user-defined categories using line-level
//! heuristics.
//!
//! ## Pipeline
//!
//! raw image → document detection → rectified crop → [external OCR] →
//! text → line categorization → category→lines mapping
//!
//! - **Document Detection**: Canny edges, contour extraction, and
//!   polygon simplification find the most plausible page boundary; when
//!   none is found the original image passes through unchanged.
//! - **Rectification**: a projective transform maps the detected
//!   quadrilateral onto an axis-aligned rectangle with bilinear resampling.
//! - **Categorization**: a fixed rule set files each text line into the
//!   matching category buckets (header, dates, amounts, entities, content).
//!
//! The OCR engine itself is a black box behind the
//! [`pipeline::OcrEngine`] trait; construct it once and pass it by
//! reference into each scan.
//!
//! ## Modules
//!
//! * [`core`] - Errors, configuration, and constants
//! * [`pipeline`] - Detection, categorization, and orchestration
//! * [`processors`] - Geometry, edge extraction, and perspective warping
//! * [`utils`] - Image loading helpers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use docscan::prelude::*;
//! use image::RgbImage;
//!
//! struct MyOcr;
//!
//! impl OcrEngine for MyOcr {
//!     fn recognize(&self, _image: &RgbImage) -> ScanResult<Vec<TextSpan>> {
//!         // call out to the real engine here
//!         Ok(vec![TextSpan::new("Invoice 01/02/2024")])
//!     }
//! }
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = MyOcr; // construct once, reuse across scans
//! let scanner = DocScanner::new();
//! let image = load_image(std::path::Path::new("receipt.jpg"))?;
//!
//! let categories = [CATEGORY_HEADER, CATEGORY_DATES, CATEGORY_CONTENT];
//! let output = scanner.scan(&engine, &image, &categories)?;
//!
//! for (category, lines) in &output.categories {
//!     println!("{category}: {lines:?}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use docscan::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{DetectorConfig, ScanError, ScanResult};
    pub use crate::pipeline::{
        categorize_lines, detect_document, DocScanner, Detection, OcrEngine, ScanOutput, TextSpan,
        CATEGORY_AMOUNTS, CATEGORY_CONTENT, CATEGORY_DATES, CATEGORY_ENTITIES, CATEGORY_HEADER,
    };
    pub use crate::processors::{rectify, Point, Quad};
    pub use crate::utils::load_image;
}
