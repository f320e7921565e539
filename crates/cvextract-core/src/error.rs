//! Error types for the resume extraction pipeline.
//!
//! This module defines the error taxonomy shared by the extraction backends
//! and the storage collaborators, plus the crate-wide [`Result`] alias.

use thiserror::Error;

/// Error types that can occur while turning a resume document into a
/// candidate record.
///
/// Absence of a recognized field (name, email, phone) is **not** an error:
/// the recognizer returns `None` for missing fields. Only container-level
/// failures and collaborator failures are represented here.
///
/// # Examples
///
/// ```rust,ignore
/// // Note: ResumeExtractor is in the cvextract-backend crate
/// use cvextract_backend::ResumeExtractor;
/// use cvextract_core::CvExtractError;
///
/// let extractor = ResumeExtractor::new();
///
/// match extractor.process_file("resume.pdf") {
///     Ok(result) => println!("email: {:?}", result.info.email),
///     Err(CvExtractError::UnsupportedFormat(msg)) => eprintln!("rejected: {msg}"),
///     Err(CvExtractError::UnreadableDocument(msg)) => eprintln!("unreadable: {msg}"),
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// ```
#[derive(Error, Debug)]
pub enum CvExtractError {
    /// The declared or detected format is neither PDF nor DOCX.
    ///
    /// Raised at the filename boundary, before any extraction attempt and
    /// before the document bytes are touched.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The format-specific reader could not parse the container.
    ///
    /// Covers corruption, encryption, truncated streams, and
    /// wrong-format-for-extension mismatches (a PDF binary submitted with a
    /// `.docx` name fails here when the DOCX reader rejects it).
    #[error("unreadable document: {0}")]
    UnreadableDocument(String),

    /// File I/O error on the path-based entry points.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Storage collaborator failure (record or blob store).
    #[error("store error: {0}")]
    Store(String),
}

/// Type alias for [`Result<T, CvExtractError>`].
pub type Result<T> = std::result::Result<T, CvExtractError>;
