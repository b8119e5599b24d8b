//! Pipeline orchestration: detect, recognize, categorize.
//!
//! [`DocScanner`] wires the document detector, an external OCR engine, and
//! the line categorizer into the image-to-structured-text pipeline. The OCR
//! engine is expensive to construct and stateful, so it is owned by the
//! caller and passed in by reference — construct it once at process start
//! and reuse it across scans, never through global state.

use crate::core::{DetectorConfig, ScanResult};
use crate::pipeline::categorize::categorize_lines;
use crate::pipeline::detect::{detect_document, Detection};
use image::RgbImage;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// One recognized text span returned by the OCR engine.
///
/// Positional data the engine may produce is deliberately not modeled here;
/// categorization operates purely on line order and content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextSpan {
    /// The recognized text.
    pub text: String,
    /// Recognition confidence in [0, 1], if the engine reports one.
    pub confidence: Option<f32>,
}

impl TextSpan {
    /// Creates a span with no confidence score.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            confidence: None,
        }
    }
}

/// The external OCR collaborator contract.
///
/// Implementations consume a rectified image and return recognized spans in
/// reading order. The engine is treated as a black box; it is the only
/// practical retry point in the pipeline, since everything around it is a
/// deterministic pure function.
pub trait OcrEngine {
    /// Recognizes text in an image.
    ///
    /// # Errors
    ///
    /// Implementations should wrap their failures in
    /// `ScanError::Recognition`.
    fn recognize(&self, image: &RgbImage) -> ScanResult<Vec<TextSpan>>;
}

/// The result of scanning one document image.
#[derive(Debug, Clone)]
pub struct ScanOutput {
    /// The rectified crop, or the unmodified input if no document was found.
    pub image: RgbImage,
    /// Whether a page boundary was detected and rectified.
    pub document_found: bool,
    /// The recognized text, spans joined with newlines.
    pub text: String,
    /// Category label to matched lines, ready for display.
    pub categories: HashMap<String, Vec<String>>,
}

/// Runs the image-to-structured-text pipeline.
///
/// A scanner holds only detector configuration; `detect` and `scan` are
/// pure functions of their inputs and safe to call from multiple threads
/// on independent documents without coordination.
#[derive(Debug, Clone, Default)]
pub struct DocScanner {
    config: DetectorConfig,
}

impl DocScanner {
    /// Creates a scanner with default detector configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a scanner with the given detector configuration.
    ///
    /// # Errors
    ///
    /// Returns `ScanError::Config` if the configuration is invalid.
    pub fn with_config(config: DetectorConfig) -> ScanResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The detector configuration in use.
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Detects and rectifies the document in an image.
    ///
    /// See [`detect_document`] for the detection policy and error behavior.
    pub fn detect(&self, image: &RgbImage) -> ScanResult<Detection> {
        detect_document(image, &self.config)
    }

    /// Runs the full pipeline: detect the document, recognize its text with
    /// the caller-owned OCR engine, and categorize the resulting lines.
    ///
    /// Recognized spans are joined with newlines before categorization;
    /// preserving line structure is what makes the positional and casing
    /// rules meaningful.
    ///
    /// # Errors
    ///
    /// Propagates `ScanError::DegenerateGeometry` from detection and any
    /// error reported by the OCR engine. A detection miss is not an error;
    /// the original image is scanned instead.
    pub fn scan<E: OcrEngine + ?Sized, S: AsRef<str>>(
        &self,
        engine: &E,
        image: &RgbImage,
        categories: &[S],
    ) -> ScanResult<ScanOutput> {
        let detection = self.detect(image)?;
        let document_found = detection.document_found();

        let spans = engine.recognize(&detection.image)?;
        debug!(spans = spans.len(), document_found, "recognition complete");

        let text = spans
            .iter()
            .map(|span| span.text.as_str())
            .collect::<Vec<_>>()
            .join("\n");

        let categories = categorize_lines(&text, categories);

        Ok(ScanOutput {
            image: detection.image,
            document_found,
            text,
            categories,
        })
    }
}
