use std::fs;
use std::io::BufReader;
use std::path::Path;

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use zip::ZipArchive;

use crate::error::Result;

/// Extract text from a Word document.
///
/// DOCX files are ZIP archives with the document body in
/// `word/document.xml`. Paragraph (`w:p`) texts are joined with a single
/// newline between consecutive paragraphs; empty paragraphs are kept so
/// blank lines survive. Legacy binary `.doc` files are not ZIP archives and
/// fail with an archive error.
pub fn extract_docx(path: &Path) -> Result<String> {
    let file = fs::File::open(path)?;
    let mut archive = ZipArchive::new(file)?;
    let document = archive.by_name("word/document.xml")?;

    let mut reader = Reader::from_reader(BufReader::new(document));
    let mut paragraphs: Vec<String> = Vec::new();
    let mut current = String::new();
    let mut in_paragraph = false;
    let mut in_text_run = false;
    let mut buf = Vec::with_capacity(1024);

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"p" => {
                    in_paragraph = true;
                    current.clear();
                }
                b"t" => in_text_run = true,
                _ => {}
            },
            Event::End(e) => match e.local_name().as_ref() {
                b"p" => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
                b"t" => in_text_run = false,
                _ => {}
            },
            Event::Text(t) => {
                // Text nodes only contribute inside a w:t run; everything
                // else in the body XML is markup.
                if in_paragraph && in_text_run {
                    current.push_str(&t.unescape()?);
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs.join("\n"))
}
