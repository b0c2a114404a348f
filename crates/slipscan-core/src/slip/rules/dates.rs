//! Date extraction with Buddhist-calendar normalization.

use chrono::NaiveDate;
use tracing::debug;

use super::patterns::{DATE_NUMERIC, DATE_THAI};
use super::FieldExtractor;

/// A successfully extracted date.
#[derive(Debug, Clone)]
pub struct DateMatch {
    /// The normalized Gregorian date.
    pub value: NaiveDate,
    /// Source text that was matched.
    pub source: String,
    /// The month token was not a known Thai abbreviation and January was
    /// assumed.
    pub month_assumed: bool,
}

/// Date field extractor.
pub struct DateExtractor;

impl DateExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateExtractor {
    type Output = DateMatch;

    fn extract(&self, text: &str) -> Option<DateMatch> {
        self.extract_all(text).into_iter().next()
    }

    /// Numeric candidates first, then the Thai month-name form.
    /// Candidates that do not form a real calendar date are dropped.
    fn extract_all(&self, text: &str) -> Vec<DateMatch> {
        let mut results = Vec::new();

        // D/M/YYYY or D.M.YYYY
        for caps in DATE_NUMERIC.captures_iter(text) {
            let day: u32 = caps[1].parse().unwrap_or(0);
            let month: u32 = caps[2].parse().unwrap_or(0);
            let year = be_to_gregorian(caps[3].parse().unwrap_or(0));

            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                results.push(DateMatch {
                    value: date,
                    source: caps[0].to_string(),
                    month_assumed: false,
                });
            }
        }

        // "15 มี.ค. 2567"
        for caps in DATE_THAI.captures_iter(text) {
            let day: u32 = caps[1].parse().unwrap_or(0);
            let year = be_to_gregorian(caps[3].parse().unwrap_or(0));

            // An unrecognized abbreviation becomes January, flagged so
            // the caller can warn.
            let (month, month_assumed) = match thai_month_number(&caps[2]) {
                Some(m) => (m, false),
                None => (1, true),
            };

            if let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
                if results.iter().any(|r| r.value == date) {
                    continue;
                }
                results.push(DateMatch {
                    value: date,
                    source: caps[0].to_string(),
                    month_assumed,
                });
            }
        }

        results
    }
}

/// Extract the slip date. The numeric day/month/year form is preferred
/// over the Thai month-name form.
pub fn extract_date(text: &str) -> Option<DateMatch> {
    let m = DateExtractor::new().extract(text)?;
    debug!(date = %m.value, source = %m.source, "date extracted");
    Some(m)
}

/// Convert a Buddhist Era year numeral to Gregorian.
///
/// Thai slips print BE years (Gregorian + 543). Anything above 2500 is
/// taken as BE; smaller years are already Gregorian.
pub fn be_to_gregorian(year: i32) -> i32 {
    if year > 2500 {
        year - 543
    } else {
        year
    }
}

/// Resolve a Thai month abbreviation to its month number.
///
/// Dots are ignored so OCR-mangled forms like "มค" still resolve.
pub fn thai_month_number(token: &str) -> Option<u32> {
    let stripped: String = token.trim().chars().filter(|c| *c != '.').collect();

    match stripped.as_str() {
        "มค" => Some(1),
        "กพ" => Some(2),
        "มีค" => Some(3),
        "เมย" => Some(4),
        "พค" => Some(5),
        "มิย" => Some(6),
        "กค" => Some(7),
        "สค" => Some(8),
        "กย" => Some(9),
        "ตค" => Some(10),
        "พย" => Some(11),
        "ธค" => Some(12),
        _ => None,
    }
}
