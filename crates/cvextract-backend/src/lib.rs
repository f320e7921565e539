//! # cvextract-backend — Resume Text Extraction
//!
//! Format-specific text extraction backends and the pipeline dispatcher.
//! Turns a binary resume document (PDF or DOCX) into a single plain-text
//! string preserving reading order, then hands it to the field recognizer
//! from `cvextract-core`.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cvextract_backend::ResumeExtractor;
//!
//! let extractor = ResumeExtractor::new();
//! let result = extractor.process_file("resume.pdf")?;
//!
//! println!("name:  {:?}", result.info.name);
//! println!("email: {:?}", result.info.email);
//! println!("phone: {:?}", result.info.phone);
//! # Ok::<(), cvextract_core::CvExtractError>(())
//! ```
//!
//! ## Supported formats
//!
//! | Format | Reader | Reading order |
//! |--------|--------|---------------|
//! | PDF | lopdf | pages in physical order, appended with no separator |
//! | DOCX | zip + quick-xml | body paragraphs, newline after each |
//!
//! Everything else is rejected with `UnsupportedFormat` at the filename
//! boundary, before any bytes are read.

pub mod docx;
pub mod extractor;
pub mod pdf;
pub mod traits;

#[cfg(test)]
pub(crate) mod fixtures;

pub use docx::DocxBackend;
pub use extractor::{ExtractionResult, ResumeExtractor};
pub use pdf::PdfBackend;
pub use traits::TextBackend;
