//! Rule-based field extractors for payment-confirmation text.
//!
//! Each field (date, amount, transaction id) has an explicit ordered list of
//! patterns; the first accepted match wins and priority never depends on
//! position in the text.

pub mod amounts;
pub mod dates;
pub mod patterns;
pub mod txn_id;

pub use amounts::{
    extract_amount, format_amount, format_grouped, parse_amount, MAX_PLAUSIBLE_AMOUNT,
    MIN_PLAUSIBLE_AMOUNT,
};
pub use dates::{extract_date, normalize_date};
pub use txn_id::extract_txn_id;
