//! Amount extraction and numeric normalization.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::slip::MAX_AMOUNT;

use super::patterns::{AMOUNT_FALLBACK, AMOUNT_PATTERNS};
use super::{ExtractionMatch, FieldExtractor};

/// Amount field extractor over the labeled pattern table.
pub struct AmountExtractor;

impl AmountExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AmountExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AmountExtractor {
    type Output = ExtractionMatch<Decimal>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// One candidate per labeled pattern, in priority order. A candidate
    /// that fails the plausibility bounds is dropped so a lower-priority
    /// pattern can still win.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for pattern in AMOUNT_PATTERNS.iter() {
            let Some(caps) = pattern.captures(text) else {
                continue;
            };
            let Some(amount) = normalize_amount(caps[1].trim()) else {
                continue;
            };
            if !is_plausible(amount) {
                continue;
            }

            let full_match = caps.get(0).unwrap();
            results.push(
                ExtractionMatch::new(amount, full_match.as_str())
                    .with_position(full_match.start(), full_match.end()),
            );
        }

        results
    }
}

/// Extract the transaction amount: labeled patterns first, then the
/// standalone-decimal fallback for slips where OCR mangled the label.
pub fn extract_amount(text: &str) -> Option<ExtractionMatch<Decimal>> {
    if let Some(m) = AmountExtractor::new().extract(text) {
        debug!(amount = %m.value, source = %m.source, "amount extracted");
        return Some(m);
    }

    if let Some(m) = fallback_amount(text) {
        debug!(amount = %m.value, source = %m.source, "amount extracted (fallback)");
        return Some(m);
    }

    None
}

/// Scan for a standalone number with exactly two decimal digits that is
/// not embedded in a longer digit run.
fn fallback_amount(text: &str) -> Option<ExtractionMatch<Decimal>> {
    for m in AMOUNT_FALLBACK.find_iter(text) {
        if has_adjacent_digit(text, m.start(), m.end()) {
            continue;
        }

        let Ok(amount) = Decimal::from_str(m.as_str()) else {
            continue;
        };
        if is_plausible(amount) {
            return Some(ExtractionMatch::new(amount, m.as_str()).with_position(m.start(), m.end()));
        }
    }

    None
}

/// True if the byte immediately before or after the span is an ASCII
/// digit, i.e. the span is part of a longer number (biller ID, phone).
fn has_adjacent_digit(text: &str, start: usize, end: usize) -> bool {
    let bytes = text.as_bytes();
    let before = start.checked_sub(1).map(|i| bytes[i]);
    let after = bytes.get(end).copied();

    matches!(before, Some(b) if b.is_ascii_digit()) || matches!(after, Some(b) if b.is_ascii_digit())
}

/// Normalize a raw amount candidate to a decimal.
///
/// A comma alongside a period is a thousands separator. A lone comma is
/// a thousands separator when the candidate has four or more digits, and
/// a decimal point otherwise (OCR often reads "12.50" as "12,50").
pub fn normalize_amount(raw: &str) -> Option<Decimal> {
    let normalized = if raw.contains(',') && raw.contains('.') {
        raw.replace(',', "")
    } else if raw.contains(',') {
        let digits_only = raw.replace(',', "");
        if digits_only.len() >= 4 {
            digits_only
        } else {
            raw.replacen(',', ".", 1)
        }
    } else {
        raw.to_string()
    };

    Decimal::from_str(&normalized).ok()
}

fn is_plausible(amount: Decimal) -> bool {
    amount > Decimal::ZERO && amount < MAX_AMOUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_normalize_amount() {
        assert_eq!(normalize_amount("1,250.50"), Some(dec("1250.50")));
        assert_eq!(normalize_amount("1250.50"), Some(dec("1250.50")));
        assert_eq!(normalize_amount("1,250"), Some(dec("1250")));
        // Short comma form reads as a decimal point
        assert_eq!(normalize_amount("1,25"), Some(dec("1.25")));
        assert_eq!(normalize_amount("12,345,678.90"), Some(dec("12345678.90")));
        assert_eq!(normalize_amount("garbage"), None);
    }

    #[test]
    fn test_labeled_thai_amount() {
        let m = extract_amount("จำนวนเงิน: 1,250.50 บาท").unwrap();
        assert_eq!(m.value, dec("1250.50"));
    }

    #[test]
    fn test_labeled_garbled_thai_amount() {
        // OCR vowel substitution in the label
        let m = extract_amount("จานวนเงีน: 350.00").unwrap();
        assert_eq!(m.value, dec("350.00"));
    }

    #[test]
    fn test_labeled_english_amount() {
        let m = extract_amount("Amount: 500.00").unwrap();
        assert_eq!(m.value, dec("500.00"));
    }

    #[test]
    fn test_currency_suffixed_amount() {
        let m = extract_amount("ชำระ 1,600.00 บาท").unwrap();
        assert_eq!(m.value, dec("1600.00"));
    }

    #[test]
    fn test_label_beats_currency_suffix() {
        // Both forms present: the labeled value wins even though the
        // suffixed one appears first in the text.
        let text = "ค่าบริการ 99.00 บาท\nจำนวนเงิน: 1,250.50";
        let m = extract_amount(text).unwrap();
        assert_eq!(m.value, dec("1250.50"));
    }

    #[test]
    fn test_out_of_bounds_candidate_falls_through() {
        // The first label matches a biller ID misread; the next labeled
        // value is still picked up.
        let text = "จำนวนเงิน: 99999999\nTotal: 250.00";
        let m = extract_amount(text).unwrap();
        assert_eq!(m.value, dec("250.00"));
    }

    #[test]
    fn test_fallback_standalone_decimal() {
        let m = extract_amount("lunch 120.50 thanks").unwrap();
        assert_eq!(m.value, dec("120.50"));
        assert_eq!(m.source, "120.50");
    }

    #[test]
    fn test_fallback_rejects_embedded_digits() {
        // Two-decimal span inside a longer digit run is part of an ID
        assert!(extract_amount("Ref 12345678.90X").is_none());
    }

    #[test]
    fn test_phone_number_not_an_amount() {
        assert!(extract_amount("โทร 0812345678").is_none());
    }

    #[test]
    fn test_empty_text() {
        assert!(extract_amount("").is_none());
    }
}
