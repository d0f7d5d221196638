use std::path::Path;

use lopdf::Document;

use crate::error::Result;

/// Extract text from a PDF, page by page.
///
/// Pages are visited in page order and their text is concatenated exactly as
/// the parser returns it; no separator is inserted between pages. Extracts
/// from digital-native PDFs with selectable text; scanned (image-only) pages
/// yield little or nothing, since no OCR is performed.
pub fn extract_pdf(path: &Path) -> Result<String> {
    let doc = Document::load(path)?;

    let mut text = String::new();
    for page_number in doc.get_pages().keys() {
        text.push_str(&doc.extract_text(&[*page_number])?);
    }
    Ok(text)
}
