//! Core library for Thai payment-slip processing.
//!
//! This crate provides:
//! - Rule-based field extraction from recognized slip text (amount, date,
//!   merchant, reference, category)
//! - Slip data models matching the transaction form contract
//! - The recognizer interface for the external image-to-text engine
//!
//! The parser is a pure function of its input text: no I/O, no shared
//! state, and it never fails. Fields that cannot be extracted are simply
//! absent from the result.

pub mod error;
pub mod models;
pub mod ocr;
pub mod slip;

pub use error::{OcrError, Result, SlipError};
pub use models::slip::{Category, ParsedSlip, TransactionType, MAX_AMOUNT};
pub use ocr::{RecognitionLang, TextRecognizer};
pub use slip::{parse_slip_text, RuleSlipParser, SlipParse, SlipParser};
