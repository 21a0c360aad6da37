//! Parsing raw OCR text into a transaction record.

use tracing::debug;

use crate::models::record::TransactionRecord;

use super::rules::{extract_amount, extract_date, extract_txn_id};

/// Parses raw OCR text into `TransactionRecord`s.
///
/// Parsing is a pure function of the text and file name: every unresolved
/// field degrades to an empty string and a record is always produced, so
/// partial data is never dropped.
#[derive(Debug, Clone)]
pub struct RecordParser {
    chit_amount: i64,
}

impl RecordParser {
    pub fn new(chit_amount: i64) -> Self {
        Self { chit_amount }
    }

    pub fn parse(&self, text: &str, file_name: &str) -> TransactionRecord {
        let record = TransactionRecord {
            transaction_date: extract_date(text, file_name),
            amount_transferred: extract_amount(text).unwrap_or_default(),
            transaction_id: extract_txn_id(text).unwrap_or_default(),
            chit_amount: self.chit_amount,
            source_file: file_name.to_string(),
        };

        debug!(
            "parsed {}: date={:?} amount={:?} txn={:?}",
            file_name, record.transaction_date, record.amount_transferred, record.transaction_id
        );

        record
    }
}
