//! Docx text extractor.
//!
//! A .docx file is a zip archive with the document body in
//! `word/document.xml`. Paragraph text is pulled in document order with a
//! streaming XML reader and joined with single spaces.

use std::io::{Cursor, Read};

use lexcloud_core::{ExtractError, MimeType, TextExtractor};
use quick_xml::events::Event;
use quick_xml::Reader;
use tracing::debug;

/// Extractor for docx uploads.
pub struct DocxExtractor;

impl DocxExtractor {
    /// Create a new docx extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocxExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for DocxExtractor {
    fn supported_types(&self) -> &[MimeType] {
        &[MimeType::Docx]
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ExtractError::Parse(format!("not a valid docx archive: {e}")))?;

        let mut document_xml = String::new();
        archive
            .by_name("word/document.xml")
            .map_err(|e| ExtractError::Parse(format!("missing word/document.xml: {e}")))?
            .read_to_string(&mut document_xml)
            .map_err(|e| ExtractError::Parse(format!("unreadable word/document.xml: {e}")))?;

        let paragraphs = paragraph_texts(&document_xml)?;
        debug!("extracted {} docx paragraphs", paragraphs.len());

        Ok(paragraphs.join(" "))
    }
}

/// Collect the text of each `w:p` paragraph in document order.
///
/// Only character data inside `w:t` elements counts as text; everything else
/// (run properties, fields, drawings) is skipped.
fn paragraph_texts(document_xml: &str) -> Result<Vec<String>, ExtractError> {
    let mut reader = Reader::from_reader(document_xml.as_bytes());
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                if e.local_name().as_ref() == b"t" {
                    in_text = true;
                }
            }
            Ok(Event::End(e)) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"p" => {
                    let text = current.trim();
                    if !text.is_empty() {
                        paragraphs.push(text.to_string());
                    }
                    current.clear();
                }
                _ => {}
            },
            Ok(Event::Text(t)) if in_text => {
                let text = t
                    .unescape()
                    .map_err(|e| ExtractError::Parse(format!("bad entity in document.xml: {e}")))?;
                current.push_str(&text);
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(ExtractError::Parse(format!(
                    "malformed document.xml: {e}"
                )));
            }
        }
        buf.clear();
    }

    Ok(paragraphs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;

    /// Build a minimal docx archive with one `w:t` run per paragraph.
    fn build_docx(paragraphs: &[&str]) -> Vec<u8> {
        let body: String = paragraphs
            .iter()
            .map(|p| format!("<w:p><w:r><w:t>{p}</w:t></w:r></w:p>"))
            .collect();
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body>{body}</w:body>
</w:document>"#
        );

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", FileOptions::default())
            .unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_supports_docx_only() {
        let extractor = DocxExtractor::new();
        assert!(extractor.supports(MimeType::Docx));
        assert!(!extractor.supports(MimeType::Pdf));
    }

    #[test]
    fn test_extract_joins_paragraphs_with_space() {
        let bytes = build_docx(&["the cat sat", "on the mat"]);
        let extractor = DocxExtractor::new();
        let text = extractor.extract(&bytes).unwrap();
        assert_eq!(text, "the cat sat on the mat");
    }

    #[test]
    fn test_extract_skips_empty_paragraphs() {
        let bytes = build_docx(&["alpha", "", "beta"]);
        let extractor = DocxExtractor::new();
        assert_eq!(extractor.extract(&bytes).unwrap(), "alpha beta");
    }

    #[test]
    fn test_extract_unescapes_entities() {
        let bytes = build_docx(&["fish &amp; chips"]);
        let extractor = DocxExtractor::new();
        assert_eq!(extractor.extract(&bytes).unwrap(), "fish & chips");
    }

    #[test]
    fn test_extract_concatenates_runs_within_paragraph() {
        let document = r#"<?xml version="1.0"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
<w:body><w:p><w:r><w:t>two </w:t></w:r><w:r><w:t>runs</w:t></w:r></w:p></w:body>
</w:document>"#;
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("word/document.xml", FileOptions::default())
            .unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let extractor = DocxExtractor::new();
        assert_eq!(extractor.extract(&bytes).unwrap(), "two runs");
    }

    #[test]
    fn test_extract_rejects_non_zip_bytes() {
        let extractor = DocxExtractor::new();
        let err = extractor.extract(b"plain text, not a zip").unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn test_extract_rejects_zip_without_document_xml() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer
            .start_file("unrelated.txt", FileOptions::default())
            .unwrap();
        writer.write_all(b"nope").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        let extractor = DocxExtractor::new();
        let err = extractor.extract(&bytes).unwrap_err();
        match err {
            ExtractError::Parse(msg) => assert!(msg.contains("document.xml")),
            other => panic!("expected Parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_paragraph_texts_ignores_non_text_elements() {
        let xml = r#"<w:document xmlns:w="x"><w:body>
<w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:t>kept</w:t></w:r></w:p>
</w:body></w:document>"#;
        let paragraphs = paragraph_texts(xml).unwrap();
        assert_eq!(paragraphs, vec!["kept".to_string()]);
    }
}
