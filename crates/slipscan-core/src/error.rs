//! Error types for the slipscan-core library.

use thiserror::Error;

/// Main error type for the slipscan library.
///
/// Parsing itself is infallible; errors only arise on the boundary to
/// the external text recognizer.
#[derive(Error, Debug)]
pub enum SlipError {
    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),
}

/// Errors reported by the external text recognizer.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The recognizer could not be initialized.
    #[error("failed to initialize recognizer: {0}")]
    Init(String),

    /// Text recognition failed outright.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// The input is not a decodable image.
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Result type for the slipscan library.
pub type Result<T> = std::result::Result<T, SlipError>;
