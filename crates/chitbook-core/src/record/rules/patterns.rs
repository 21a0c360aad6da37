//! Regex patterns for payment-confirmation extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Date patterns
    pub static ref DATE_DMY: Regex = Regex::new(
        r"(\d{1,2}[-/]\d{1,2}[-/]\d{2,4})"
    ).unwrap();

    pub static ref DATE_YMD: Regex = Regex::new(
        r"(\d{4}[-/]\d{1,2}[-/]\d{1,2})"
    ).unwrap();

    // "Sept" is a common irregular spelling in payment apps, handled later
    // by the normalizer.
    pub static ref DATE_TEXTUAL: Regex = Regex::new(
        r"(?i)(\d{1,2}\s+(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Sept|Oct|Nov|Dec)[a-z]*\s+\d{2,4})"
    ).unwrap();

    /// `YYYY-MM-DD` token embedded in a file name.
    pub static ref FILENAME_DATE: Regex = Regex::new(
        r"(\d{4}-\d{2}-\d{2})"
    ).unwrap();

    // Amount patterns. OCR frequently substitutes the rupee sign with `%`
    // or `=`, or drops it entirely, so the marker set is deliberately loose.
    pub static ref AMOUNT_CURRENCY: Regex = Regex::new(
        r"(?is)[₹%Rs.]+\s*(\d{1,3}(?:,\d{3})+)"
    ).unwrap();

    pub static ref AMOUNT_PAID_TO_MARKED: Regex = Regex::new(
        r"(?is)Paid to.*?[₹%=]\s*(\d{1,3}(?:,\d{3})+)"
    ).unwrap();

    /// "Paid to" with the bare number on one of the next two lines.
    pub static ref AMOUNT_PAID_TO_BARE: Regex = Regex::new(
        r"(?is)Paid to.*?\n.*?\n.*?(\d{1,3}(?:,\d{3})+)"
    ).unwrap();

    pub static ref AMOUNT_DEBITED: Regex = Regex::new(
        r"(?is)Debited.*?[₹%=]\s*(\d{1,3}(?:,\d{3})+)"
    ).unwrap();

    pub static ref AMOUNT_LABELED: Regex = Regex::new(
        r"(?is)(?:Amount|Amt|Total)[:\s]*[₹%Rs.]*\s*(\d{1,3}(?:,\d{3})+)"
    ).unwrap();

    pub static ref AMOUNT_EQUALS: Regex = Regex::new(
        r"=\s*(\d{1,3}(?:,\d{3})+)"
    ).unwrap();

    // Transaction identifier patterns. `(?i)` makes the A-Z0-9 classes
    // accept lowercase as well.
    pub static ref TXN_LABELED: Regex = Regex::new(
        r"(?i)(?:Transaction ID|Txn ID|UTR|Reference)[:\s]*([A-Z0-9]{10,})"
    ).unwrap();

    pub static ref TXN_RAIL: Regex = Regex::new(
        r"(?i)(?:UPI|IMPS|NEFT)[:\s]*([A-Z0-9]{10,})"
    ).unwrap();

    pub static ref TXN_STANDALONE: Regex = Regex::new(
        r"(?i)\b([A-Z0-9]{12,})\b"
    ).unwrap();
}
