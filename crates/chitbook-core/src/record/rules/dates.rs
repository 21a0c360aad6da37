//! Date location and normalization.

use chrono::NaiveDate;
use regex::Regex;

use super::patterns::{DATE_DMY, DATE_TEXTUAL, DATE_YMD, FILENAME_DATE};

/// Accepted input formats, tried in priority order. chrono requires the
/// whole string to be consumed, so a partial match never slips through.
const INPUT_FORMATS: [&str; 5] = [
    "%Y-%m-%d",
    "%d-%m-%Y",
    "%d/%m/%Y",
    "%d %b %Y",
    "%d %B %Y",
];

/// Canonical output format, e.g. `04-Jan-25`.
const CANONICAL_FORMAT: &str = "%d-%b-%y";

/// Normalize a raw date string to `DD-Mon-YY`.
///
/// Degrades to passthrough: if no format parses, the (possibly
/// Sept-corrected) input comes back unchanged. Empty in, empty out.
pub fn normalize_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    // "Sept" is not a parseable month token.
    let cleaned = raw.replace("Sept", "Sep");

    for format in INPUT_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, format) {
            return date.format(CANONICAL_FORMAT).to_string();
        }
    }

    cleaned
}

/// Ordered date patterns scanned over the OCR text body.
fn text_patterns() -> [&'static Regex; 3] {
    [&*DATE_DMY, &*DATE_YMD, &*DATE_TEXTUAL]
}

/// Locate a date in the OCR text, falling back to a `YYYY-MM-DD` token in
/// the file name, and normalize it. Empty string when nothing matches.
pub fn extract_date(text: &str, file_name: &str) -> String {
    for pattern in text_patterns() {
        if let Some(caps) = pattern.captures(text) {
            return normalize_date(&caps[1]);
        }
    }

    if let Some(caps) = FILENAME_DATE.captures(file_name) {
        return normalize_date(&caps[1]);
    }

    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn normalize_iso_date() {
        assert_eq!(normalize_date("2025-01-04"), "04-Jan-25");
    }

    #[test]
    fn normalize_day_first_dates() {
        assert_eq!(normalize_date("04-01-2025"), "04-Jan-25");
        assert_eq!(normalize_date("04/01/2025"), "04-Jan-25");
    }

    #[test]
    fn normalize_textual_months() {
        assert_eq!(normalize_date("04 Jan 2025"), "04-Jan-25");
        assert_eq!(normalize_date("04 Sept 2025"), "04-Sep-25");
        assert_eq!(normalize_date("04 January 2025"), "04-Jan-25");
    }

    #[test]
    fn normalize_empty_is_empty() {
        assert_eq!(normalize_date(""), "");
    }

    #[test]
    fn normalize_passthrough_on_failure() {
        assert_eq!(normalize_date("not-a-date"), "not-a-date");
    }

    #[test]
    fn digit_date_wins_over_textual() {
        let text = "received on 4 Feb 2025, ref 05/03/2025";
        assert_eq!(extract_date(text, "img.jpg"), "05-Mar-25");
    }

    #[test]
    fn textual_date_found_when_no_digit_date() {
        let text = "Completed\n04 Jan 2025, 10:12 am";
        assert_eq!(extract_date(text, "img.jpg"), "04-Jan-25");
    }

    #[test]
    fn filename_fallback() {
        assert_eq!(extract_date("no dates here", "IMG_2025-01-04_0012.jpg"), "04-Jan-25");
    }

    #[test]
    fn no_date_anywhere_is_empty() {
        assert_eq!(extract_date("nothing useful", "img.jpg"), "");
    }
}
