//! Tesseract-backed text extraction via the command-line binary.

use std::path::Path;
use std::process::Command;

use tracing::debug;

use crate::error::OcrError;
use crate::models::config::OcrConfig;

use super::TextExtractor;

/// Invokes the `tesseract` executable once per image, reading the recognized
/// text from stdout.
#[derive(Debug, Clone)]
pub struct TesseractCli {
    command: String,
    language: String,
}

impl TesseractCli {
    pub fn new(config: &OcrConfig) -> Self {
        Self {
            command: config.command.clone(),
            language: config.language.clone(),
        }
    }
}

impl TextExtractor for TesseractCli {
    fn extract_text(&self, path: &Path) -> Result<String, OcrError> {
        // Decode up front so a corrupt or non-image file is reported as
        // unreadable rather than as an opaque engine failure.
        image::open(path).map_err(|e| OcrError::UnreadableImage(e.to_string()))?;

        let output = Command::new(&self.command)
            .arg(path)
            .arg("stdout")
            .args(["-l", &self.language])
            .output()
            .map_err(|e| OcrError::Engine(format!("failed to run {}: {}", self.command, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Engine(stderr.trim().to_string()));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        debug!("OCR produced {} bytes for {}", text.len(), path.display());
        Ok(text)
    }
}
