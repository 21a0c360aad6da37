//! Transaction field extraction from raw OCR text.

mod parser;
pub mod rules;

pub use parser::RecordParser;
