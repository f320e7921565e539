//! PDF text extraction backend
//!
//! Pure-Rust extraction via lopdf: pages are visited in physical order and
//! each page's text layer is appended directly, with no separator between
//! pages. A page with no text layer (a rasterized scan) contributes an empty
//! string, not an error — the recognizer downstream treats empty text as a
//! normal no-match input. No OCR fallback is attempted.

use crate::traits::TextBackend;
use cvextract_core::{CvExtractError, DocumentFormat, Result};
use log::debug;

/// PDF backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PdfBackend;

impl PdfBackend {
    /// Create a new PDF backend
    #[inline]
    #[must_use = "constructors return a new instance"]
    pub const fn new() -> Self {
        Self
    }
}

impl TextBackend for PdfBackend {
    #[inline]
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Pdf
    }

    fn extract_bytes(&self, data: &[u8]) -> Result<String> {
        let doc = lopdf::Document::load_mem(data).map_err(|e| {
            CvExtractError::UnreadableDocument(format!("failed to open PDF: {e}"))
        })?;

        // Encrypted containers have no reliably extractable text layer
        if doc.is_encrypted() {
            return Err(CvExtractError::UnreadableDocument(
                "PDF is encrypted".to_string(),
            ));
        }

        let mut text = String::new();
        for page_no in doc.get_pages().keys() {
            match doc.extract_text(&[*page_no]) {
                Ok(page_text) => text.push_str(&page_text),
                // Pure-image pages or malformed content streams: empty
                // contribution for this page, keep going
                Err(e) => debug!("page {page_no}: no extractable text ({e})"),
            }
        }

        Ok(text)
    }
}
