//! Error types for the chitbook-core library.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the chitbook library.
#[derive(Error, Debug)]
pub enum ChitError {
    /// OCR collaborator error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The transactions folder does not exist.
    #[error("transactions folder not found: {}", .0.display())]
    FolderNotFound(PathBuf),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by OCR text extractors.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The image file could not be decoded.
    #[error("unreadable image: {0}")]
    UnreadableImage(String),

    /// The OCR engine failed or could not be invoked.
    #[error("OCR engine failed: {0}")]
    Engine(String),
}

/// Result type for the chitbook library.
pub type Result<T> = std::result::Result<T, ChitError>;
