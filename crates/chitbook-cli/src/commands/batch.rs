//! Batch command - build the ledger CSV from a folder of screenshots.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use chitbook_core::record::rules::{format_amount, format_grouped};
use chitbook_core::{
    aggregate, list_images, LedgerPipeline, LedgerReport, RecordParser, TesseractCli,
    LEDGER_HEADERS,
};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Folder containing payment screenshots
    #[arg(default_value = "transactions")]
    folder: PathBuf,

    /// Output CSV file (default from config: transactions.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the configured chit amount
    #[arg(long)]
    chit_amount: Option<i64>,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let files = list_images(&args.folder)?;
    if files.is_empty() {
        println!(
            "{} No images found in {}",
            style("ℹ").blue(),
            args.folder.display()
        );
        return Ok(());
    }

    println!(
        "{} Found {} images to process",
        style("ℹ").blue(),
        files.len()
    );

    let chit_amount = args.chit_amount.unwrap_or(config.ledger.chit_amount);
    let pipeline = LedgerPipeline::new(
        TesseractCli::new(&config.ocr),
        RecordParser::new(chit_amount),
    );

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} images")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut records = Vec::with_capacity(files.len());
    for path in &files {
        debug!("processing {}", path.display());
        records.push(pipeline.process_image(path));
        pb.inc(1);
    }
    pb.finish_with_message("Complete");

    let report = aggregate(records);

    let output_path = args
        .output
        .unwrap_or_else(|| PathBuf::from(&config.ledger.output_file));
    fs::write(&output_path, render_ledger_csv(&report)?)?;

    println!();
    println!(
        "{} Ledger written to {}",
        style("✓").green(),
        output_path.display()
    );
    println!(
        "   {} transactions in {:?}",
        report.records.len(),
        start.elapsed()
    );
    println!("   Total chit amount: ₹{}", format_grouped(report.chit_total));
    println!(
        "   Total amount transferred: ₹{}",
        format_amount(report.amount_total)
    );

    Ok(())
}

/// Render the ledger as CSV: header, one row per record, a blank separator
/// row, then the totals row.
fn render_ledger_csv(report: &LedgerReport) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(LEDGER_HEADERS)?;
    for record in &report.records {
        let chit = record.chit_amount.to_string();
        wtr.write_record([
            record.transaction_date.as_str(),
            record.amount_transferred.as_str(),
            record.transaction_id.as_str(),
            chit.as_str(),
            record.source_file.as_str(),
        ])?;
    }
    let mut out = String::from_utf8(wtr.into_inner()?)?;

    // Blank row between the records and the totals row.
    out.push('\n');

    let mut totals = csv::Writer::from_writer(vec![]);
    totals.write_record(&report.totals_row())?;
    out.push_str(&String::from_utf8(totals.into_inner()?)?);

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chitbook_core::TransactionRecord;

    #[test]
    fn renders_header_rows_blank_line_and_totals() {
        let records = vec![
            TransactionRecord {
                transaction_date: "04-Jan-25".to_string(),
                amount_transferred: "25000".to_string(),
                transaction_id: "415523698741".to_string(),
                chit_amount: 40_000,
                source_file: "a.jpg".to_string(),
            },
            TransactionRecord::empty("b.jpg", 40_000),
        ];
        let report = aggregate(records);

        let csv = render_ledger_csv(&report).unwrap();
        let expected = "\
Transaction Date,Amount Transferred,Transaction ID,Chit Amount,Source File
04-Jan-25,25000,415523698741,40000,a.jpg
,,,40000,b.jpg

TOTAL,\"25,000.00\",,\"80,000\",
";

        assert_eq!(csv, expected);
    }
}
