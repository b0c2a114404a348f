//! Rule-based slip parser: fixed-order extraction passes over raw text.

use tracing::{debug, info};

use crate::error::Result;
use crate::models::slip::ParsedSlip;
use crate::ocr::{RecognitionLang, TextRecognizer};

use super::rules::{
    amounts::extract_amount, category::infer_category, dates::extract_date,
    merchant::extract_merchant, reference::extract_reference,
};

/// Result of parsing one slip.
#[derive(Debug, Clone)]
pub struct SlipParse {
    /// Extracted slip fields.
    pub slip: ParsedSlip,
    /// Advisory notes about degraded extraction (missing fields, an
    /// assumed month). Never fatal.
    pub warnings: Vec<String>,
}

/// Trait for slip parsing.
pub trait SlipParser {
    /// Parse slip fields from raw recognized text.
    ///
    /// Total over its input: any string yields a result, empty and
    /// garbage included, and the same string always yields the same
    /// result.
    fn parse(&self, text: &str) -> SlipParse;
}

/// Rule-based parser for Thai bank payment slips (SCB, Kbank, Bangkok
/// Bank and similar formats).
pub struct RuleSlipParser;

impl RuleSlipParser {
    pub fn new() -> Self {
        Self
    }

    /// Recognize a slip image and parse the resulting text.
    ///
    /// Recognizer failures propagate. A recognition that succeeds with
    /// empty or garbled text is not a failure; it parses to an
    /// all-absent slip.
    pub fn parse_image<R: TextRecognizer>(
        &self,
        recognizer: &R,
        image: &[u8],
    ) -> Result<SlipParse> {
        let text = recognizer.recognize(image, RecognitionLang::ThaiEnglish)?;
        Ok(self.parse(&text))
    }
}

impl Default for RuleSlipParser {
    fn default() -> Self {
        Self::new()
    }
}

impl SlipParser for RuleSlipParser {
    fn parse(&self, text: &str) -> SlipParse {
        let mut warnings = Vec::new();
        let mut slip = ParsedSlip::default();

        info!("parsing slip from {} characters of text", text.len());

        if let Some(amount) = extract_amount(text) {
            slip.amount = Some(amount.value);
        } else {
            warnings.push("could not extract amount".to_string());
        }

        match extract_date(text) {
            Some(date) => {
                if date.month_assumed {
                    warnings.push(format!(
                        "unrecognized month abbreviation in \"{}\", assumed January",
                        date.source.trim()
                    ));
                }
                slip.date = Some(date.value);
            }
            None => warnings.push("could not extract date".to_string()),
        }

        slip.merchant = extract_merchant(text).map(|m| m.value);
        slip.reference = extract_reference(text).map(|m| m.value);

        if let Some(merchant) = &slip.merchant {
            slip.category = Some(infer_category(merchant));
        }

        slip.note = build_note(slip.merchant.as_deref(), slip.reference.as_deref());

        warnings.extend(slip.validate());

        debug!(?slip, "slip parsed");

        SlipParse { slip, warnings }
    }
}

/// Assemble the review note from whichever of merchant and reference
/// resolved. Empty when neither did.
fn build_note(merchant: Option<&str>, reference: Option<&str>) -> String {
    let mut parts = Vec::new();
    if let Some(merchant) = merchant {
        parts.push(format!("Payment to: {}", merchant));
    }
    if let Some(reference) = reference {
        parts.push(format!("Ref: {}", reference));
    }
    parts.join(" | ")
}

/// Parse raw slip text with the default rule set.
pub fn parse_slip_text(text: &str) -> ParsedSlip {
    RuleSlipParser::new().parse(text).slip
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    use crate::error::OcrError;
    use crate::models::slip::{Category, TransactionType};

    use super::*;

    #[test]
    fn test_parse_thai_slip() {
        let text = "จำนวนเงิน: 1,250.50 บาท\nไปยัง: 7-Eleven\nรหัสอ้างอิง: ABC123";
        let result = RuleSlipParser::new().parse(text);

        let expected = ParsedSlip {
            amount: Some(Decimal::new(125050, 2)),
            date: None,
            merchant: Some("7-Eleven".to_string()),
            reference: Some("ABC123".to_string()),
            txn_type: TransactionType::Expense,
            category: Some(Category::Groceries),
            note: "Payment to: 7-Eleven | Ref: ABC123".to_string(),
        };
        assert_eq!(result.slip, expected);
    }

    #[test]
    fn test_parse_english_slip() {
        let text = "Amount: 500.00\nTo: Starbucks Cafe";
        let slip = parse_slip_text(text);

        assert_eq!(slip.amount, Some(Decimal::new(50000, 2)));
        assert_eq!(slip.merchant.as_deref(), Some("Starbucks Cafe"));
        assert_eq!(slip.category, Some(Category::FoodAndDining));
        assert_eq!(slip.reference, None);
        assert_eq!(slip.note, "Payment to: Starbucks Cafe");
    }

    #[test]
    fn test_parse_buddhist_year_date() {
        let slip = parse_slip_text("โอนเงินสำเร็จ 15/03/2567");
        assert_eq!(slip.date, NaiveDate::from_ymd_opt(2024, 3, 15));
    }

    #[test]
    fn test_long_digit_run_is_not_an_amount() {
        let slip = parse_slip_text("Tel 0812345678");
        assert_eq!(slip.amount, None);
    }

    #[test]
    fn test_parse_empty_text() {
        let result = RuleSlipParser::new().parse("");

        assert_eq!(result.slip, ParsedSlip::default());
        assert_eq!(result.slip.note, "");
        assert!(result
            .warnings
            .contains(&"could not extract amount".to_string()));
        assert!(result
            .warnings
            .contains(&"could not extract date".to_string()));
    }

    #[test]
    fn test_parse_is_idempotent() {
        let text = "จำนวนเงิน: 99.00 บาท\nไปยัง: Grab\n15/03/2567";
        assert_eq!(parse_slip_text(text), parse_slip_text(text));
    }

    #[test]
    fn test_month_assumption_warns() {
        let result = RuleSlipParser::new().parse("5 ขข. 2567");

        assert_eq!(result.slip.date, NaiveDate::from_ymd_opt(2024, 1, 5));
        assert!(result.warnings.iter().any(|w| w.contains("assumed January")));
    }

    #[test]
    fn test_category_only_with_merchant() {
        let slip = parse_slip_text("Amount: 250.00");
        assert_eq!(slip.merchant, None);
        assert_eq!(slip.category, None);
    }

    #[test]
    fn test_note_with_reference_only() {
        let slip = parse_slip_text("Ref: XYZ789");
        assert_eq!(slip.note, "Ref: XYZ789");
    }

    #[test]
    fn test_build_note() {
        assert_eq!(build_note(None, None), "");
        assert_eq!(build_note(Some("Grab"), None), "Payment to: Grab");
        assert_eq!(build_note(None, Some("A1")), "Ref: A1");
        assert_eq!(
            build_note(Some("Grab"), Some("A1")),
            "Payment to: Grab | Ref: A1"
        );
    }

    struct FixedRecognizer(&'static str);

    impl TextRecognizer for FixedRecognizer {
        fn recognize(
            &self,
            _image: &[u8],
            _lang: RecognitionLang,
        ) -> std::result::Result<String, OcrError> {
            Ok(self.0.to_string())
        }
    }

    struct FailingRecognizer;

    impl TextRecognizer for FailingRecognizer {
        fn recognize(
            &self,
            _image: &[u8],
            _lang: RecognitionLang,
        ) -> std::result::Result<String, OcrError> {
            Err(OcrError::InvalidImage("not an image".to_string()))
        }
    }

    #[test]
    fn test_parse_image() {
        let recognizer = FixedRecognizer("Amount: 500.00\nTo: Starbucks Cafe");
        let result = RuleSlipParser::new()
            .parse_image(&recognizer, b"fake-jpeg")
            .unwrap();

        assert_eq!(result.slip.amount, Some(Decimal::new(50000, 2)));
    }

    #[test]
    fn test_parse_image_recognizer_error() {
        let result = RuleSlipParser::new().parse_image(&FailingRecognizer, b"junk");
        assert!(result.is_err());
    }
}
