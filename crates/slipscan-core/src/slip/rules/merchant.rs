//! Merchant / recipient extraction.

use tracing::debug;

use super::patterns::MERCHANT_PATTERNS;
use super::{ExtractionMatch, FieldExtractor};

/// Merchant field extractor.
pub struct MerchantExtractor;

impl MerchantExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MerchantExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for MerchantExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// One candidate per label pattern, in priority order. The capture
    /// runs to the end of the line and is trimmed.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for pattern in MERCHANT_PATTERNS.iter() {
            let Some(caps) = pattern.captures(text) else {
                continue;
            };
            let name = caps[1].trim();
            if name.is_empty() {
                continue;
            }

            let full_match = caps.get(0).unwrap();
            results.push(
                ExtractionMatch::new(name.to_string(), full_match.as_str())
                    .with_position(full_match.start(), full_match.end()),
            );
        }

        results
    }
}

/// Extract the payee name following a recipient label.
pub fn extract_merchant(text: &str) -> Option<ExtractionMatch<String>> {
    let m = MerchantExtractor::new().extract(text)?;
    debug!(merchant = %m.value, "merchant extracted");
    Some(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thai_label() {
        let m = extract_merchant("ไปยัง: 7-Eleven\nอื่นๆ").unwrap();
        assert_eq!(m.value, "7-Eleven");
    }

    #[test]
    fn test_english_label() {
        let m = extract_merchant("To: Starbucks Cafe").unwrap();
        assert_eq!(m.value, "Starbucks Cafe");
    }

    #[test]
    fn test_recipient_label() {
        let m = extract_merchant("Recipient: Lotus Express").unwrap();
        assert_eq!(m.value, "Lotus Express");
    }

    #[test]
    fn test_capture_stops_at_line_break() {
        let m = extract_merchant("ผู้รับ: บจก. ทรู มูฟ\nRef: XYZ").unwrap();
        assert_eq!(m.value, "บจก. ทรู มูฟ");
    }

    #[test]
    fn test_thai_label_preferred() {
        let m = extract_merchant("To: Somewhere\nไปยัง: 7-Eleven").unwrap();
        assert_eq!(m.value, "7-Eleven");
    }

    #[test]
    fn test_no_label() {
        assert!(extract_merchant("just a random line").is_none());
    }
}
