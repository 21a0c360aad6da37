//! Ledger aggregation: the record list plus a synthesized totals row.

use rust_decimal::Decimal;

use crate::models::record::TransactionRecord;
use crate::record::rules::{format_amount, format_grouped, parse_amount};

/// Column headers of the exported ledger.
pub const LEDGER_HEADERS: [&str; 5] = [
    "Transaction Date",
    "Amount Transferred",
    "Transaction ID",
    "Chit Amount",
    "Source File",
];

/// Aggregated run output: records in input order plus computed totals.
///
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct LedgerReport {
    pub records: Vec<TransactionRecord>,

    /// Sum of the fixed chit amount over all records.
    pub chit_total: i64,

    /// Sum of the transferred amounts that parsed as numerals. Records with
    /// an empty or unparseable amount contribute nothing; they are not
    /// treated as zero.
    pub amount_total: Decimal,
}

/// Aggregate records into a ledger report, preserving input order.
pub fn aggregate(records: Vec<TransactionRecord>) -> LedgerReport {
    let chit_total = records.iter().map(|r| r.chit_amount).sum();
    let amount_total = records
        .iter()
        .filter_map(|r| parse_amount(&r.amount_transferred))
        .sum();

    LedgerReport {
        records,
        chit_total,
        amount_total,
    }
}

impl LedgerReport {
    /// Totals pseudo-row in ledger column order: `TOTAL` marker, formatted
    /// amount total, blank id, formatted chit total, blank source file.
    pub fn totals_row(&self) -> [String; 5] {
        [
            "TOTAL".to_string(),
            format_amount(self.amount_total),
            String::new(),
            format_grouped(self.chit_total),
            String::new(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record(amount: &str, chit: i64, source: &str) -> TransactionRecord {
        TransactionRecord {
            transaction_date: String::new(),
            amount_transferred: amount.to_string(),
            transaction_id: String::new(),
            chit_amount: chit,
            source_file: source.to_string(),
        }
    }

    #[test]
    fn sums_chit_and_parsed_amounts() {
        let report = aggregate(vec![
            record("25000", 40_000, "a.jpg"),
            record("", 40_000, "b.jpg"),
        ]);

        assert_eq!(report.chit_total, 80_000);
        assert_eq!(report.amount_total, Decimal::from(25_000));
    }

    #[test]
    fn unparseable_amounts_are_excluded_not_zeroed() {
        let report = aggregate(vec![
            record("12000", 40_000, "a.jpg"),
            record("n/a", 40_000, "b.jpg"),
            record("13000", 40_000, "c.jpg"),
        ]);

        assert_eq!(report.amount_total, Decimal::from(25_000));
        assert_eq!(report.chit_total, 120_000);
    }

    #[test]
    fn preserves_input_order() {
        let report = aggregate(vec![
            record("1000", 40_000, "2025-01-04.jpg"),
            record("2000", 40_000, "2025-01-02.jpg"),
        ]);

        let sources: Vec<&str> = report.records.iter().map(|r| r.source_file.as_str()).collect();
        assert_eq!(sources, vec!["2025-01-04.jpg", "2025-01-02.jpg"]);
    }

    #[test]
    fn totals_row_formatting() {
        let report = aggregate(vec![
            record("25000", 40_000, "a.jpg"),
            record("", 40_000, "b.jpg"),
        ]);

        assert_eq!(
            report.totals_row(),
            [
                "TOTAL".to_string(),
                "25,000.00".to_string(),
                String::new(),
                "80,000".to_string(),
                String::new(),
            ]
        );
    }

    #[test]
    fn totals_round_trip_exactly() {
        let report = aggregate(vec![
            record("40000", 40_000, "a.jpg"),
            record("39500", 40_000, "b.jpg"),
        ]);
        let row = report.totals_row();

        assert_eq!(parse_amount(&row[1]), Some(report.amount_total));
        assert_eq!(parse_amount(&row[3]), Some(Decimal::from(report.chit_total)));
    }

    #[test]
    fn empty_run_has_zero_totals() {
        let report = aggregate(Vec::new());

        assert_eq!(report.chit_total, 0);
        assert_eq!(report.amount_total, Decimal::ZERO);
        assert_eq!(report.totals_row()[1], "0.00");
    }
}
