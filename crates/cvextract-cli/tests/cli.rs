//! CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::PathBuf;

/// Write a minimal DOCX resume into `dir` and return its path.
fn write_docx(dir: &std::path::Path, name: &str, paragraphs: &[&str]) -> PathBuf {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    let document_xml = format!(
        concat!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
            "<w:body>{}</w:body></w:document>"
        ),
        body
    );

    let mut writer = zip::ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", zip::write::SimpleFileOptions::default())
        .unwrap();
    writer.write_all(document_xml.as_bytes()).unwrap();
    let data = writer.finish().unwrap().into_inner();

    let path = dir.join(name);
    std::fs::write(&path, data).unwrap();
    path
}

#[test]
fn formats_lists_pdf_and_docx() {
    Command::cargo_bin("cvextract")
        .unwrap()
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("PDF"))
        .stdout(predicate::str::contains("DOCX"));
}

#[test]
fn formats_json_shape() {
    let output = Command::cargo_bin("cvextract")
        .unwrap()
        .args(["formats", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let formats = parsed.as_array().unwrap();
    assert_eq!(formats.len(), 2);
    assert_eq!(formats[0]["format"], "PDF");
    assert_eq!(formats[1]["extensions"][0], "docx");
}

#[test]
fn extract_json_reports_recognized_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_docx(
        dir.path(),
        "mary.docx",
        &["Mary Watson", "mary@example.com", "(212) 555-0100"],
    );

    let output = Command::cargo_bin("cvextract")
        .unwrap()
        .arg("extract")
        .arg("--json")
        .arg(&path)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let parsed: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(parsed["format"], "DOCX");
    assert_eq!(parsed["name"], "Mary Watson");
    assert_eq!(parsed["email"], "mary@example.com");
    assert_eq!(parsed["phone"], "(212) 555-0100");
    assert!(parsed["text_prefix"]
        .as_str()
        .unwrap()
        .starts_with("Mary Watson"));
}

#[test]
fn extract_text_dumps_raw_extraction() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_docx(dir.path(), "john.docx", &["John Smith", "Engineer"]);

    Command::cargo_bin("cvextract")
        .unwrap()
        .args(["extract", "--text"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::eq("John Smith\nEngineer\n"));
}

#[test]
fn extract_unsupported_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("resume.txt");
    std::fs::write(&path, "plain text resume").unwrap();

    Command::cargo_bin("cvextract")
        .unwrap()
        .arg("extract")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

#[test]
fn extract_corrupt_docx_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.docx");
    std::fs::write(&path, b"not a zip archive").unwrap();

    Command::cargo_bin("cvextract")
        .unwrap()
        .arg("extract")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("unreadable document"));
}

#[test]
fn extract_missing_fields_show_placeholder() {
    let dir = tempfile::tempdir().unwrap();
    // No capitalized multi-word line, no email, no phone
    let path = write_docx(dir.path(), "sparse.docx", &["profile", "details to follow"]);

    Command::cargo_bin("cvextract")
        .unwrap()
        .arg("extract")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("(not found)"));
}
