//! Regex tables for Thai payment-slip extraction.
//!
//! Each table is ordered by priority; extractors try entries in sequence
//! and the first match wins. Keyword-labeled amount patterns come before
//! currency-suffixed ones: a bare "number + currency" form is far more
//! likely to misfire on unrelated digits elsewhere in the slip.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Labeled and currency-suffixed amount patterns.
    ///
    /// The primary Thai label appears twice: once verbatim and once with
    /// the vowel substitutions OCR commonly makes on it.
    pub static ref AMOUNT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"จำนวนเงิน[:\s]+([\d,]+(?:[.,]\d{2})?)").unwrap(),
        Regex::new(r"จ[าำ]นวนเง[ิี]น[:\s]+([\d,]+(?:[.,]\d{2})?)").unwrap(),
        Regex::new(r"(?i)amount[:\s]+([\d,]+(?:[.,]\d{2})?)").unwrap(),
        Regex::new(r"(?i)total[:\s]+([\d,]+(?:[.,]\d{2})?)").unwrap(),
        Regex::new(r"ยอดเงิน[:\s]+([\d,]+(?:[.,]\d{2})?)").unwrap(),
        Regex::new(r"เง[ิี]น[:\s]+([\d,]+(?:[.,]\d{2})?)").unwrap(),
        Regex::new(r"(?i)(\d{1,3}(?:,\d{3})+(?:\.\d{2})?)\s*(?:บาท|baht)").unwrap(),
        Regex::new(r"(?i)(\d+\.\d{2})\s*(?:บาท|baht)").unwrap(),
    ];

    /// Standalone two-decimal number for the fallback pass. Digit
    /// adjacency is checked in code against the match span; the regex
    /// crate has no lookaround.
    pub static ref AMOUNT_FALLBACK: Regex = Regex::new(r"\d{1,6}\.\d{2}").unwrap();

    /// Numeric D/M/YYYY with `.` or `/` separators.
    pub static ref DATE_NUMERIC: Regex =
        Regex::new(r"(\d{1,2})\s*[./]\s*(\d{1,2})\s*[./]\s*(\d{4})").unwrap();

    /// Day, Thai month abbreviation, year ("15 มี.ค. 2567"). The month
    /// token is captured loosely and resolved through the lookup table,
    /// so a garbled abbreviation still yields a date.
    pub static ref DATE_THAI: Regex =
        Regex::new(r"(\d{1,2})\s+(\p{Thai}{1,2}\.?\p{Thai}\.?)\s+(\d{4})").unwrap();

    /// Recipient label patterns.
    pub static ref MERCHANT_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"ไปยัง[:\s]+([^\n]+)").unwrap(),
        Regex::new(r"(?i)\bto[:\s]+([^\n]+)").unwrap(),
        Regex::new(r"ผู้รับ[:\s]+([^\n]+)").unwrap(),
        Regex::new(r"(?i)\brecipient[:\s]+([^\n]+)").unwrap(),
    ];

    /// Reference label patterns.
    pub static ref REFERENCE_PATTERNS: Vec<Regex> = vec![
        Regex::new(r"รหัสอ้างอิง[:\s]+([A-Za-z0-9]+)").unwrap(),
        Regex::new(r"(?i)\breference[:\s]+([A-Za-z0-9]+)").unwrap(),
        Regex::new(r"(?i)\bref[:\s]+([A-Za-z0-9]+)").unwrap(),
        Regex::new(r"เลขที่อ้างอิง[:\s]+([A-Za-z0-9]+)").unwrap(),
    ];
}
