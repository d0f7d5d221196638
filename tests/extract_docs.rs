//! Tests for document loading: extension dispatch and the three extractors,
//! against fixture files generated on the fly.

use std::fs;
use std::io::Write;
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

use float_text::extract::load_document;

// ── Fixture builders ────────────────────────────────────────────────────

/// Write a minimal DOCX (ZIP with word/document.xml) containing the given
/// paragraphs.
fn write_docx(path: &Path, paragraphs: &[&str]) {
    let body: String = paragraphs
        .iter()
        .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
        .collect();
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{body}</w:body></w:document>"#
    );

    let file = fs::File::create(path).unwrap();
    let mut zip = zip::ZipWriter::new(file);
    zip.start_file("word/document.xml", zip::write::FileOptions::default())
        .unwrap();
    zip.write_all(xml.as_bytes()).unwrap();
    zip.finish().unwrap();
}

/// Write a PDF with one page per entry in `pages`, each drawing its text.
fn write_pdf(path: &Path, pages: &[&str]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
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
            content.encode().unwrap(),
        ));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.save(path).unwrap();
}

// ── Plain text ──────────────────────────────────────────────────────────

#[test]
fn txt_loads_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.txt");
    fs::write(&path, "hello").unwrap();

    assert_eq!(load_document(&path).unwrap(), Some("hello".to_string()));
}

#[test]
fn txt_preserves_interior_whitespace() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("multi.txt");
    fs::write(&path, "line one\n\nline two\n").unwrap();

    assert_eq!(
        load_document(&path).unwrap(),
        Some("line one\n\nline two\n".to_string())
    );
}

#[test]
fn missing_txt_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_document(&dir.path().join("absent.txt")).is_err());
}

// ── Extension dispatch ──────────────────────────────────────────────────

#[test]
fn unknown_extension_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("notes.md");
    fs::write(&path, "ignored").unwrap();

    assert_eq!(load_document(&path).unwrap(), None);
}

#[test]
fn uppercase_extension_loads_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("HELLO.TXT");
    fs::write(&path, "ignored").unwrap();

    assert_eq!(load_document(&path).unwrap(), None);
}

// ── Word documents ──────────────────────────────────────────────────────

#[test]
fn docx_paragraphs_join_with_single_newline() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("two.docx");
    write_docx(&path, &["one", "two"]);

    assert_eq!(load_document(&path).unwrap(), Some("one\ntwo".to_string()));
}

#[test]
fn docx_keeps_empty_paragraphs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("gap.docx");
    write_docx(&path, &["above", "", "below"]);

    assert_eq!(
        load_document(&path).unwrap(),
        Some("above\n\nbelow".to_string())
    );
}

#[test]
fn malformed_docx_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.docx");
    fs::write(&path, "this is not a zip archive").unwrap();

    assert!(load_document(&path).is_err());
}

// ── PDFs ────────────────────────────────────────────────────────────────

/// Pages concatenate in page order with no separator inserted by the
/// loader. Parsers may emit their own layout whitespace, so compare with
/// whitespace stripped.
#[test]
fn pdf_pages_concatenate_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ab.pdf");
    write_pdf(&path, &["A", "B"]);

    let text = load_document(&path).unwrap().unwrap();
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(compact, "AB");
}

#[test]
fn malformed_pdf_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.pdf");
    fs::write(&path, "%PDF-1.5 but nothing else").unwrap();

    assert!(load_document(&path).is_err());
}
