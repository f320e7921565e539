//! Input format types for resume extraction
//!
//! This module defines the `DocumentFormat` enum representing the document
//! formats the pipeline accepts, and the extension-based detection used at
//! the upload boundary.

use crate::error::{CvExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Resume document format
///
/// Formats are determined from the original filename's extension
/// (case-insensitive); anything other than `.pdf`/`.docx` is rejected
/// before the document bytes reach an extraction backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentFormat {
    /// PDF document
    #[serde(rename = "PDF")]
    Pdf,
    /// Microsoft Word document (.docx)
    #[serde(rename = "DOCX")]
    Docx,
}

impl DocumentFormat {
    /// Detect format from a file extension
    #[inline]
    #[must_use = "detects format from file extension"]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }

    /// Detect format from a file path, rejecting unsupported extensions
    ///
    /// This is the upload boundary: it runs before any bytes are read, so an
    /// unsupported extension never reaches an extraction backend.
    ///
    /// # Errors
    ///
    /// Returns [`CvExtractError::UnsupportedFormat`] if the path has no
    /// extension or the extension is not `.pdf`/`.docx`.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(|| {
                CvExtractError::UnsupportedFormat(format!(
                    "no file extension: {}",
                    path.display()
                ))
            })?;
        Self::from_extension(ext).ok_or_else(|| {
            CvExtractError::UnsupportedFormat(format!(
                "extension '{ext}' is not PDF or DOCX"
            ))
        })
    }

    /// Get file extensions associated with this format
    #[inline]
    #[must_use = "returns file extensions for this format"]
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Pdf => &["pdf"],
            Self::Docx => &["docx"],
        }
    }

    /// All formats the pipeline accepts
    #[inline]
    #[must_use = "returns the accepted formats"]
    pub const fn all() -> &'static [Self] {
        &[Self::Pdf, Self::Docx]
    }
}

impl std::fmt::Display for DocumentFormat {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for DocumentFormat {
    type Err = CvExtractError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "PDF" => Ok(Self::Pdf),
            "DOCX" => Ok(Self::Docx),
            _ => Err(CvExtractError::UnsupportedFormat(format!(
                "unknown format: '{s}'"
            ))),
        }
    }
}
