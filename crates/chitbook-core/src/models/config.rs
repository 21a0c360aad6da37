//! Configuration structures for the ledger pipeline.

use serde::{Deserialize, Serialize};

/// Main configuration for chitbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChitConfig {
    /// Ledger configuration.
    pub ledger: LedgerConfig,

    /// OCR collaborator configuration.
    pub ocr: OcrConfig,
}

impl Default for ChitConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig::default(),
            ocr: OcrConfig::default(),
        }
    }
}

/// Ledger configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Fixed reference contribution amount applied to every record.
    pub chit_amount: i64,

    /// Default output file for the batch command.
    pub output_file: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            chit_amount: 40_000,
            output_file: "transactions.csv".to_string(),
        }
    }
}

/// OCR collaborator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Tesseract executable to invoke.
    pub command: String,

    /// Recognition language passed with `-l`.
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            command: "tesseract".to_string(),
            language: "eng".to_string(),
        }
    }
}

impl ChitConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_chit_amount() {
        let config = ChitConfig::default();
        assert_eq!(config.ledger.chit_amount, 40_000);
        assert_eq!(config.ledger.output_file, "transactions.csv");
        assert_eq!(config.ocr.command, "tesseract");
    }

    #[test]
    fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ChitConfig::default();
        config.ledger.chit_amount = 25_000;
        config.ocr.language = "hin".to_string();
        config.save(&path).unwrap();

        let loaded = ChitConfig::from_file(&path).unwrap();
        assert_eq!(loaded.ledger.chit_amount, 25_000);
        assert_eq!(loaded.ocr.language, "hin");
    }

    #[test]
    fn partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"ledger": {"chit_amount": 50000}}"#).unwrap();

        let loaded = ChitConfig::from_file(&path).unwrap();
        assert_eq!(loaded.ledger.chit_amount, 50_000);
        assert_eq!(loaded.ledger.output_file, "transactions.csv");
        assert_eq!(loaded.ocr.language, "eng");
    }
}
