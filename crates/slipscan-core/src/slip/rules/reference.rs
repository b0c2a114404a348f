//! Transaction reference / confirmation code extraction.

use tracing::debug;

use super::patterns::REFERENCE_PATTERNS;
use super::{ExtractionMatch, FieldExtractor};

/// Reference field extractor.
pub struct ReferenceExtractor;

impl ReferenceExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ReferenceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for ReferenceExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// One candidate per label pattern, in priority order. The captured
    /// token is a single alphanumeric run, so no trimming is needed.
    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();

        for pattern in REFERENCE_PATTERNS.iter() {
            let Some(caps) = pattern.captures(text) else {
                continue;
            };

            let full_match = caps.get(0).unwrap();
            results.push(
                ExtractionMatch::new(caps[1].to_string(), full_match.as_str())
                    .with_position(full_match.start(), full_match.end()),
            );
        }

        results
    }
}

/// Extract the transaction reference code following a reference label.
pub fn extract_reference(text: &str) -> Option<ExtractionMatch<String>> {
    let m = ReferenceExtractor::new().extract(text)?;
    debug!(reference = %m.value, "reference extracted");
    Some(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thai_label() {
        let m = extract_reference("รหัสอ้างอิง: ABC123").unwrap();
        assert_eq!(m.value, "ABC123");
    }

    #[test]
    fn test_english_labels() {
        assert_eq!(extract_reference("Reference: TXN001").unwrap().value, "TXN001");
        assert_eq!(extract_reference("Ref: 20240315X").unwrap().value, "20240315X");
    }

    #[test]
    fn test_alternate_thai_label() {
        let m = extract_reference("เลขที่อ้างอิง: 0042ZZ").unwrap();
        assert_eq!(m.value, "0042ZZ");
    }

    #[test]
    fn test_capture_stops_at_non_alphanumeric() {
        let m = extract_reference("Ref: AB12-99").unwrap();
        assert_eq!(m.value, "AB12");
    }

    #[test]
    fn test_no_label() {
        assert!(extract_reference("ABC123 on its own").is_none());
    }
}
