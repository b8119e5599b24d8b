//! Error types for the document scanning pipeline.
//!
//! This module defines the errors that can occur while detecting,
//! rectifying, and categorizing a document, along with utility
//! constructors for creating them with appropriate context.
//!
//! Two outcomes are deliberately not errors: a detection miss (no
//! page-like contour found) is signaled by returning the input image
//! unchanged, and empty OCR text simply yields empty category buckets.

use thiserror::Error;

/// A convenient result alias for pipeline operations.
pub type ScanResult<T> = Result<T, ScanError>;

/// Enum representing the errors that can occur in the scanning pipeline.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Error occurred while loading an image.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// Error indicating invalid input.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// The detected quadrilateral collapses to a crop below the minimum
    /// allowed dimensions (near-zero area or collinear corners).
    #[error("degenerate quadrilateral: computed crop is {width}x{height}")]
    DegenerateGeometry {
        /// The computed crop width.
        width: u32,
        /// The computed crop height.
        height: u32,
    },

    /// Error indicating a configuration problem.
    #[error("configuration: {message}")]
    Config {
        /// A message describing the configuration error.
        message: String,
    },

    /// Error reported by the external OCR engine.
    #[error("text recognition")]
    Recognition(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

impl ScanError {
    /// Creates a ScanError for invalid input.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the invalid input.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a ScanError for configuration errors.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the configuration error.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates a ScanError for configuration errors with field context.
    ///
    /// # Arguments
    ///
    /// * `field` - The field where the error occurred.
    /// * `value` - The value of the field.
    /// * `reason` - The reason for the error.
    pub fn config_error_with_context(field: &str, value: &str, reason: &str) -> Self {
        Self::Config {
            message: format!(
                "Configuration error in field '{}' with value '{}': {}",
                field, value, reason
            ),
        }
    }

    /// Creates a ScanError wrapping a failure from the OCR engine.
    ///
    /// # Arguments
    ///
    /// * `error` - The underlying error reported by the engine.
    pub fn recognition(error: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Recognition(Box::new(error))
    }
}

/// Implementation of From<image::ImageError> for ScanError.
///
/// This allows image::ImageError to be automatically converted to ScanError.
impl From<image::ImageError> for ScanError {
    fn from(error: image::ImageError) -> Self {
        Self::ImageLoad(error)
    }
}
