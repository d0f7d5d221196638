//! Document text extraction.
//!
//! This module provides plain-text extraction for the file types the viewer
//! can import:
//! - TXT (plain text, read verbatim)
//! - PDF (per-page text, concatenated in page order)
//! - DOCX/DOC (Microsoft Word, paragraphs joined with newlines)

mod docx;
mod pdf;
mod text;

pub use docx::extract_docx;
pub use pdf::extract_pdf;
pub use text::extract_text;

use std::path::Path;

use crate::error::Result;

/// Document kind, derived once from a path's extension and then matched
/// exhaustively.
///
/// The extension match is case-sensitive: `.TXT` is `Unknown`, matching the
/// suffix checks the viewer has always performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocKind {
    PlainText,
    Pdf,
    WordDoc,
    Unknown,
}

impl DocKind {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("txt") => DocKind::PlainText,
            Some("pdf") => DocKind::Pdf,
            Some("docx") | Some("doc") => DocKind::WordDoc,
            _ => DocKind::Unknown,
        }
    }
}

/// Extract text from a document, dispatching on its kind.
///
/// Returns `Ok(None)` for unknown extensions: nothing is loaded and the
/// caller leaves its current text untouched. Extraction failures (missing
/// file, invalid PDF, invalid archive) are returned as errors for the caller
/// to surface.
pub fn load_document(path: &Path) -> Result<Option<String>> {
    match DocKind::from_path(path) {
        DocKind::PlainText => Ok(Some(extract_text(path)?)),
        DocKind::Pdf => Ok(Some(extract_pdf(path)?)),
        DocKind::WordDoc => Ok(Some(extract_docx(path)?)),
        DocKind::Unknown => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_extension() {
        assert_eq!(DocKind::from_path(Path::new("a.txt")), DocKind::PlainText);
        assert_eq!(DocKind::from_path(Path::new("a.pdf")), DocKind::Pdf);
        assert_eq!(DocKind::from_path(Path::new("a.docx")), DocKind::WordDoc);
        assert_eq!(DocKind::from_path(Path::new("a.doc")), DocKind::WordDoc);
        assert_eq!(DocKind::from_path(Path::new("a.md")), DocKind::Unknown);
        assert_eq!(DocKind::from_path(Path::new("noext")), DocKind::Unknown);
    }

    #[test]
    fn extension_match_is_case_sensitive() {
        assert_eq!(DocKind::from_path(Path::new("a.TXT")), DocKind::Unknown);
        assert_eq!(DocKind::from_path(Path::new("a.Pdf")), DocKind::Unknown);
    }
}
