//! PDF content extractor.
//!
//! Uses lopdf to read per-page text. Pages are concatenated with a single
//! leading space each and the final result is trimmed.

use cvscreen_core::{ExtractError, TextExtractor};
use lopdf::Document;
use std::path::Path;
use tracing::debug;

/// Extractor for PDF files.
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfExtractor {
    fn can_extract(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractError> {
        debug!("Extracting PDF: {:?}", path);

        let doc = Document::load(path).map_err(|e| ExtractError::Parse(e.to_string()))?;

        let mut text = String::new();
        for page_num in doc.get_pages().keys() {
            // A page that yields no text contributes an empty string; only
            // an unreadable document as a whole is an error.
            let page_text = match doc.extract_text(&[*page_num]) {
                Ok(t) => t,
                Err(e) => {
                    debug!("Page {} yielded no text: {}", page_num, e);
                    String::new()
                }
            };
            text.push(' ');
            text.push_str(&page_text);
        }

        Ok(text.trim().to_string())
    }
}
