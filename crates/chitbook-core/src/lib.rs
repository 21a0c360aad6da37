//! Core library for building a chit contribution ledger from scanned payment
//! confirmations.
//!
//! This crate provides:
//! - An OCR collaborator abstraction (tesseract-backed, or canned text for tests)
//! - Ordered-fallback field extraction (date, amount, transaction id)
//! - Date normalization to the canonical `DD-Mon-YY` form
//! - Ledger aggregation with a synthesized totals row

pub mod error;
pub mod ledger;
pub mod models;
pub mod ocr;
pub mod pipeline;
pub mod record;

pub use error::{ChitError, OcrError, Result};
pub use ledger::{aggregate, LedgerReport, LEDGER_HEADERS};
pub use models::config::ChitConfig;
pub use models::record::TransactionRecord;
pub use ocr::{StaticTextExtractor, TesseractCli, TextExtractor};
pub use pipeline::{list_images, LedgerPipeline, IMAGE_EXTENSIONS};
pub use record::RecordParser;
