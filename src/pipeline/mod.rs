//! The document scanning pipeline.
//!
//! # Modules
//!
//! * `categorize` - Heuristic line categorization of OCR text
//! * `detect` - Document boundary detection and rectification
//! * `scanner` - Orchestration around a caller-owned OCR engine

pub mod categorize;
pub mod detect;
pub mod scanner;

pub use categorize::{
    categorize_lines, CATEGORY_AMOUNTS, CATEGORY_CONTENT, CATEGORY_DATES, CATEGORY_ENTITIES,
    CATEGORY_HEADER,
};
pub use detect::{detect_document, Detection};
pub use scanner::{DocScanner, OcrEngine, ScanOutput, TextSpan};
