//! In-memory document fixtures for unit tests
//!
//! Real containers, not hand-written byte blobs: PDFs are synthesized with
//! lopdf's document builder, DOCX files with the zip writer around a minimal
//! `word/document.xml`.

use std::io::{Cursor, Write};

/// Build a PDF with one page per entry; each page's text layer holds the
/// entry as a single text-show operation.
pub(crate) fn pdf_with_pages(pages: &[&str]) -> Vec<u8> {
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Document, Object, Stream};

    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for page_text in pages {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![50.into(), 700.into()]),
                Operation::new("Tj", vec![Object::string_literal(*page_text)]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(
            dictionary! {},
            content.encode().expect("encode content stream"),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        kids.push(page_id.into());
    }

    let count = i64::try_from(kids.len()).expect("page count fits i64");
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("serialize PDF");
    buf
}

/// Build a PDF whose trailer carries a standard-security `Encrypt`
/// dictionary, standing in for a password-protected document.
pub(crate) fn encrypted_pdf() -> Vec<u8> {
    use lopdf::{dictionary, Document, Object};

    let data = pdf_with_pages(&["locked content"]);
    let mut doc = Document::load_mem(&data).expect("reload fixture PDF");

    let encrypt_id = doc.add_object(dictionary! {
        "Filter" => "Standard",
        "V" => 1,
        "R" => 2,
        "O" => Object::string_literal("0123456789abcdef0123456789abcdef"),
        "U" => Object::string_literal("0123456789abcdef0123456789abcdef"),
        "P" => -44,
    });
    doc.trailer.set("Encrypt", encrypt_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).expect("serialize PDF");
    buf
}

/// Build a DOCX container whose `word/document.xml` body is `body_xml`.
pub(crate) fn docx_with_body(body_xml: &str) -> Vec<u8> {
    let document_xml = format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
            "<w:body>{}</w:body></w:document>"
        ),
        body_xml
    );

    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let options = zip::write::SimpleFileOptions::default();
    writer
        .start_file("[Content_Types].xml", options)
        .expect("start content types entry");
    writer
        .write_all(
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
                r#"<Default Extension="xml" ContentType="application/xml"/></Types>"#
            )
            .as_bytes(),
        )
        .expect("write content types");
    writer
        .start_file("word/document.xml", options)
        .expect("start document entry");
    writer
        .write_all(document_xml.as_bytes())
        .expect("write document.xml");
    writer.finish().expect("finish DOCX container").into_inner()
}

/// Build a DOCX with one body paragraph per entry.
pub(crate) fn docx_with_paragraphs(paragraphs: &[&str]) -> Vec<u8> {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    docx_with_body(&body)
}
