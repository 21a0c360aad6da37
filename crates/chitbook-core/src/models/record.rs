//! Transaction record model.

use serde::{Deserialize, Serialize};

/// One parsed payment confirmation.
///
/// Every extracted field defaults to an empty string rather than an option:
/// downstream aggregation treats empty as "unknown", never as zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Canonical `DD-Mon-YY` date, or empty if unresolved.
    pub transaction_date: String,

    /// Decimal numeral without thousands separators, or empty if unresolved
    /// or implausible.
    pub amount_transferred: String,

    /// Alphanumeric transaction/UTR identifier, or empty if unresolved.
    pub transaction_id: String,

    /// Fixed reference contribution amount, identical for every record in a run.
    pub chit_amount: i64,

    /// File name of the originating image.
    pub source_file: String,
}

impl TransactionRecord {
    /// Record with all extracted fields empty.
    pub fn empty(source_file: impl Into<String>, chit_amount: i64) -> Self {
        Self {
            transaction_date: String::new(),
            amount_transferred: String::new(),
            transaction_id: String::new(),
            chit_amount,
            source_file: source_file.into(),
        }
    }
}
