//! Resume extraction pipeline
//!
//! Single entry point tying the two stages together: format-dispatched text
//! extraction followed by heuristic field recognition. Dispatch is decided
//! purely by the declared/detected [`DocumentFormat`] tag, never by sniffing
//! file content; a mismatched declaration fails in the wrong reader with
//! `UnreadableDocument` instead of silently mis-extracting.

use crate::docx::DocxBackend;
use crate::pdf::PdfBackend;
use crate::traits::TextBackend;
use cvextract_core::{recognize, CandidateInfo, DocumentFormat, Result};
use std::path::Path;
use std::time::{Duration, Instant};

/// Result of running the full pipeline over one document.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Format the document was extracted as.
    pub format: DocumentFormat,
    /// Full extracted text, in reading order.
    pub text: String,
    /// Recognized candidate fields.
    pub info: CandidateInfo,
    /// Wall-clock time spent extracting and recognizing.
    pub elapsed: Duration,
}

/// Format-dispatching resume extractor.
///
/// Stateless and cheap to construct; one instance may serve concurrent
/// invocations without coordination.
///
/// # Examples
///
/// ```rust,ignore
/// use cvextract_backend::ResumeExtractor;
///
/// let extractor = ResumeExtractor::new();
/// let result = extractor.process_file("resume.pdf")?;
/// println!("email: {:?}", result.info.email);
/// # Ok::<(), cvextract_core::CvExtractError>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ResumeExtractor {
    pdf: PdfBackend,
    docx: DocxBackend,
}

impl ResumeExtractor {
    /// Create a new extractor.
    #[inline]
    #[must_use = "constructors return a new instance"]
    pub const fn new() -> Self {
        Self {
            pdf: PdfBackend::new(),
            docx: DocxBackend::new(),
        }
    }

    /// Extract plain text from document bytes with a declared format.
    ///
    /// # Errors
    /// Returns `UnreadableDocument` if the format-specific reader cannot
    /// open the container.
    pub fn extract_bytes(&self, data: &[u8], format: DocumentFormat) -> Result<String> {
        match format {
            DocumentFormat::Pdf => self.pdf.extract_bytes(data),
            DocumentFormat::Docx => self.docx.extract_bytes(data),
        }
    }

    /// Extract plain text from a document file.
    ///
    /// The format is detected from the filename extension *before* the file
    /// is read, so an unsupported extension never touches the bytes.
    ///
    /// # Errors
    /// Returns `UnsupportedFormat` for extensions other than
    /// `.pdf`/`.docx`, `Io` if the file cannot be read, and
    /// `UnreadableDocument` if the reader cannot open the container.
    pub fn extract_file<P: AsRef<Path>>(&self, path: P) -> Result<String> {
        let format = DocumentFormat::from_path(path.as_ref())?;
        let data = std::fs::read(path.as_ref())?;
        self.extract_bytes(&data, format)
    }

    /// Run the full pipeline over document bytes: extract, then recognize.
    ///
    /// # Errors
    /// Same failure modes as [`Self::extract_bytes`]; recognition itself
    /// never fails.
    pub fn process_bytes(
        &self,
        data: &[u8],
        format: DocumentFormat,
    ) -> Result<ExtractionResult> {
        let start = Instant::now();
        let text = self.extract_bytes(data, format)?;
        let info = recognize(&text);
        Ok(ExtractionResult {
            format,
            text,
            info,
            elapsed: start.elapsed(),
        })
    }

    /// Run the full pipeline over a document file.
    ///
    /// # Errors
    /// Same failure modes as [`Self::extract_file`].
    pub fn process_file<P: AsRef<Path>>(&self, path: P) -> Result<ExtractionResult> {
        let format = DocumentFormat::from_path(path.as_ref())?;
        let data = std::fs::read(path.as_ref())?;
        self.process_bytes(&data, format)
    }
}
