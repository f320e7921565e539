//! DOCX (Microsoft Word) text extraction backend
//!
//! Manual ZIP + XML parsing (docx-rs is writer-only). A DOCX file is a ZIP
//! archive whose main content lives in `word/document.xml`; this backend
//! streams that one part and collects the visible run text (`w:t`) of each
//! top-level body paragraph, appending a newline after every paragraph
//! including the last. Tables (`w:tbl`), headers, footers, and all other
//! structural parts are not visited — only the main paragraph stream.

use crate::traits::TextBackend;
use cvextract_core::{CvExtractError, DocumentFormat, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};
use zip::ZipArchive;

/// DOCX backend
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DocxBackend;

impl DocxBackend {
    /// Create a new DOCX backend
    #[inline]
    #[must_use = "constructors return a new instance"]
    pub const fn new() -> Self {
        Self
    }

    /// Walk `word/document.xml`, emitting one line per top-level body
    /// paragraph.
    fn walk_document(xml_content: &str) -> Result<String> {
        let mut reader = Reader::from_str(xml_content);
        // DOCX uses xml:space="preserve" for significant whitespace; never trim
        reader.trim_text(false);

        let mut buf = Vec::new();
        let mut text = String::new();
        // Depth of nested w:tbl elements; paragraphs inside tables are skipped
        let mut table_depth = 0usize;
        let mut in_paragraph = false;
        let mut in_run_text = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(e)) => match e.name().as_ref() {
                    b"w:tbl" => table_depth += 1,
                    b"w:p" if table_depth == 0 => in_paragraph = true,
                    b"w:t" if in_paragraph => in_run_text = true,
                    _ => {}
                },
                Ok(Event::Empty(e)) => {
                    // Self-closed empty paragraph still contributes its newline
                    if e.name().as_ref() == b"w:p" && table_depth == 0 {
                        text.push('\n');
                    }
                }
                Ok(Event::Text(e)) if in_run_text => {
                    text.push_str(&e.unescape().unwrap_or_default());
                }
                Ok(Event::End(e)) => match e.name().as_ref() {
                    b"w:tbl" => table_depth = table_depth.saturating_sub(1),
                    b"w:p" if in_paragraph => {
                        in_paragraph = false;
                        text.push('\n');
                    }
                    b"w:t" => in_run_text = false,
                    _ => {}
                },
                Ok(Event::Eof) => break,
                Err(e) => {
                    return Err(CvExtractError::UnreadableDocument(format!(
                        "error parsing document.xml: {e:?}"
                    )));
                }
                _ => {}
            }
            buf.clear();
        }

        Ok(text)
    }
}

impl TextBackend for DocxBackend {
    #[inline]
    fn format(&self) -> DocumentFormat {
        DocumentFormat::Docx
    }

    fn extract_bytes(&self, data: &[u8]) -> Result<String> {
        let mut archive = ZipArchive::new(Cursor::new(data)).map_err(|e| {
            CvExtractError::UnreadableDocument(format!("not a DOCX container: {e}"))
        })?;

        let mut xml_content = String::new();
        {
            let mut document_xml = archive.by_name("word/document.xml").map_err(|e| {
                CvExtractError::UnreadableDocument(format!(
                    "word/document.xml not found: {e}"
                ))
            })?;
            document_xml.read_to_string(&mut xml_content).map_err(|e| {
                CvExtractError::UnreadableDocument(format!(
                    "failed to read document.xml: {e}"
                ))
            })?;
        }

        Self::walk_document(&xml_content)
    }
}
