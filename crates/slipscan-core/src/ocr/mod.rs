//! Interface to the external image-to-text recognizer.
//!
//! The recognizer itself (Tesseract, a cloud OCR API) lives outside this
//! crate; parsing only needs the text it produces. A recognition that
//! succeeds but reads nothing useful - an empty or garbled string - is
//! not an error here: it parses to a slip with every field absent.

pub use crate::error::OcrError;

/// Recognition language mode requested from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecognitionLang {
    /// Thai plus English, the mode payment slips are scanned with.
    ThaiEnglish,
    /// English only.
    English,
}

impl Default for RecognitionLang {
    fn default() -> Self {
        Self::ThaiEnglish
    }
}

impl RecognitionLang {
    /// Engine-facing language tag (Tesseract convention).
    pub fn tag(&self) -> &'static str {
        match self {
            RecognitionLang::ThaiEnglish => "tha+eng",
            RecognitionLang::English => "eng",
        }
    }
}

/// An image-to-text engine capable of reading payment slips.
pub trait TextRecognizer {
    /// Recognize text in an encoded image (JPEG/PNG bytes).
    ///
    /// Returns the raw recognized text, which may be empty or noisy.
    fn recognize(&self, image: &[u8], lang: RecognitionLang) -> Result<String, OcrError>;
}
