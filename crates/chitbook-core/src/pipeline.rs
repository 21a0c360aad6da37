//! Sequential folder pipeline: list images, OCR each, parse each.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{ChitError, Result};
use crate::models::record::TransactionRecord;
use crate::ocr::TextExtractor;
use crate::record::RecordParser;

/// Image extensions accepted as payment screenshots (case-insensitive).
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "bmp"];

/// Image files in `dir`, sorted by file name so reruns always process in
/// the same order.
pub fn list_images(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(ChitError::FolderNotFound(dir.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .map(|e| IMAGE_EXTENSIONS.contains(&e.to_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();

    files.sort_by_key(|path| path.file_name().map(|n| n.to_os_string()));
    Ok(files)
}

/// Processes a folder of payment screenshots one image at a time.
pub struct LedgerPipeline<E: TextExtractor> {
    extractor: E,
    parser: RecordParser,
}

impl<E: TextExtractor> LedgerPipeline<E> {
    pub fn new(extractor: E, parser: RecordParser) -> Self {
        Self { extractor, parser }
    }

    /// OCR one image and parse the text into a record.
    ///
    /// An OCR failure is logged and downgraded to empty raw text, so one bad
    /// image never aborts the batch and still yields a traceable record.
    pub fn process_image(&self, path: &Path) -> TransactionRecord {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let text = match self.extractor.extract_text(path) {
            Ok(text) => text,
            Err(e) => {
                warn!("OCR failed for {}: {}", file_name, e);
                String::new()
            }
        };

        self.parser.parse(&text, &file_name)
    }

    /// Process every image in `dir` in sorted-filename order.
    pub fn process_folder(&self, dir: &Path) -> Result<Vec<TransactionRecord>> {
        let files = list_images(dir)?;
        info!("found {} images in {}", files.len(), dir.display());

        Ok(files.iter().map(|path| self.process_image(path)).collect())
    }
}
