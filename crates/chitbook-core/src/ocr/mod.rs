//! OCR collaborator interface.
//!
//! The pipeline treats character recognition as an external black box: one
//! call per image returning raw text. `TesseractCli` invokes the tesseract
//! binary; `StaticTextExtractor` serves canned text for tests.

mod tesseract;

pub use tesseract::TesseractCli;

use std::collections::HashMap;
use std::path::Path;

use crate::error::OcrError;

/// Abstraction over an OCR backend producing raw text for one image.
pub trait TextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, OcrError>;
}

/// Canned filename-to-text map, useful for testing the extraction pipeline
/// without a real OCR engine. Unknown files yield empty text.
#[derive(Debug, Default)]
pub struct StaticTextExtractor {
    texts: HashMap<String, String>,
}

impl StaticTextExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_text(mut self, file_name: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(file_name.into(), text.into());
        self
    }
}

impl TextExtractor for StaticTextExtractor {
    fn extract_text(&self, path: &Path) -> Result<String, OcrError> {
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
        Ok(self.texts.get(name).cloned().unwrap_or_default())
    }
}
