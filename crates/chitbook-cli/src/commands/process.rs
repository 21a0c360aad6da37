//! Process command - extract a record from a single payment screenshot.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use chitbook_core::{RecordParser, TesseractCli, TextExtractor, TransactionRecord, LEDGER_HEADERS};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input image
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Override the configured chit amount
    #[arg(long)]
    chit_amount: Option<i64>,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let extractor = TesseractCli::new(&config.ocr);
    let text = extractor.extract_text(&args.input)?;
    debug!("OCR text for {}:\n{}", args.input.display(), text);

    let chit_amount = args.chit_amount.unwrap_or(config.ledger.chit_amount);
    let file_name = args
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let record = RecordParser::new(chit_amount).parse(&text, &file_name);

    let output = format_record(&record, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    Ok(())
}

fn format_record(record: &TransactionRecord, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(vec![]);
            wtr.write_record(LEDGER_HEADERS)?;
            let chit = record.chit_amount.to_string();
            wtr.write_record([
                record.transaction_date.as_str(),
                record.amount_transferred.as_str(),
                record.transaction_id.as_str(),
                chit.as_str(),
                record.source_file.as_str(),
            ])?;
            Ok(String::from_utf8(wtr.into_inner()?)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!("Source:      {}\n", record.source_file));
            out.push_str(&format!("Date:        {}\n", blank_or(&record.transaction_date)));
            out.push_str(&format!("Amount:      {}\n", blank_or(&record.amount_transferred)));
            out.push_str(&format!("Txn ID:      {}\n", blank_or(&record.transaction_id)));
            out.push_str(&format!("Chit amount: {}\n", record.chit_amount));
            Ok(out)
        }
    }
}

fn blank_or(value: &str) -> &str {
    if value.is_empty() {
        "(not found)"
    } else {
        value
    }
}
