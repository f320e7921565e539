//! Core trait definition for text extraction backends

use cvextract_core::{DocumentFormat, Result};
use std::path::Path;

/// Main trait for text extraction backends
///
/// Each backend (PDF, DOCX) implements this trait to turn one document
/// container into a single plain-text string preserving reading order.
/// Backends are stateless: one invocation reads one document and carries no
/// shared mutable state, so concurrent invocations need no coordination.
pub trait TextBackend: Send + Sync {
    /// Get the format this backend handles
    fn format(&self) -> DocumentFormat;

    /// Extract text from document bytes
    ///
    /// # Errors
    /// Returns [`cvextract_core::CvExtractError::UnreadableDocument`] if the
    /// container is corrupt, encrypted, or not this backend's format.
    fn extract_bytes(&self, data: &[u8]) -> Result<String>;

    /// Extract text from a document file
    ///
    /// # Errors
    /// Returns an error if file reading or extraction fails.
    fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let data = std::fs::read(path.as_ref())?;
        self.extract_bytes(&data)
    }

    /// Check if this backend can handle the given format
    fn can_handle(&self, format: DocumentFormat) -> bool {
        self.format() == format
    }
}
