//! Amount extraction, plausibility validation, and grouped formatting.

use std::str::FromStr;

use regex::Regex;
use rust_decimal::Decimal;
use tracing::debug;

use super::patterns::{
    AMOUNT_CURRENCY, AMOUNT_DEBITED, AMOUNT_EQUALS, AMOUNT_LABELED, AMOUNT_PAID_TO_BARE,
    AMOUNT_PAID_TO_MARKED,
};

/// Inclusive plausibility bounds for a transferred amount. Real transfers
/// cluster near the fixed chit amount; grouped numbers outside this window
/// are OCR noise from unrelated UI text.
pub const MIN_PLAUSIBLE_AMOUNT: i64 = 1_000;
pub const MAX_PLAUSIBLE_AMOUNT: i64 = 100_000;

/// Amount patterns in priority order.
fn amount_patterns() -> [&'static Regex; 6] {
    [
        &*AMOUNT_CURRENCY,
        &*AMOUNT_PAID_TO_MARKED,
        &*AMOUNT_PAID_TO_BARE,
        &*AMOUNT_DEBITED,
        &*AMOUNT_LABELED,
        &*AMOUNT_EQUALS,
    ]
}

/// Extract the transferred amount as a separator-free numeral string.
///
/// Only the first occurrence of each pattern is considered. A candidate
/// outside the plausibility bounds rejects that whole pattern and the scan
/// moves on to the next one in priority order.
pub fn extract_amount(text: &str) -> Option<String> {
    for pattern in amount_patterns() {
        if let Some(caps) = pattern.captures(text) {
            let numeral = caps[1].replace(',', "");
            match Decimal::from_str(&numeral) {
                Ok(value) if is_plausible(value) => return Some(numeral),
                Ok(value) => debug!("rejecting implausible amount candidate {}", value),
                Err(_) => {}
            }
        }
    }

    None
}

fn is_plausible(value: Decimal) -> bool {
    value >= Decimal::from(MIN_PLAUSIBLE_AMOUNT) && value <= Decimal::from(MAX_PLAUSIBLE_AMOUNT)
}

/// Parse a numeral that may carry thousands separators.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(&s.replace(',', "")).ok()
}

/// Format an integer with thousands separators (`80000` -> `"80,000"`).
pub fn format_grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let grouped = group_digits(&digits);
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Format a decimal with two places and thousands separators
/// (`25000` -> `"25,000.00"`).
pub fn format_amount(value: Decimal) -> String {
    let fixed = format!("{:.2}", value.round_dp(2));
    let (integer_part, decimal_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let (sign, digits) = match integer_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer_part),
    };
    format!("{}{}.{}", sign, group_digits(digits), decimal_part)
}

fn group_digits(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut grouped = String::with_capacity(chars.len() + chars.len() / 3);

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    grouped
}
