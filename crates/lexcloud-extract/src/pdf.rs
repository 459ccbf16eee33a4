//! PDF text extractor.
//!
//! Uses lopdf to walk pages in document order and pull each page's text
//! layer. A page without extractable text contributes nothing; a byte stream
//! that is not a valid PDF fails the run.

use lexcloud_core::{ExtractError, MimeType, TextExtractor};
use lopdf::Document;
use tracing::{debug, warn};

/// Extractor for `application/pdf` uploads.
pub struct PdfExtractor;

impl PdfExtractor {
    /// Create a new PDF extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfExtractor {
    fn supported_types(&self) -> &[MimeType] {
        &[MimeType::Pdf]
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        let doc = Document::load_mem(bytes)
            .map_err(|e| ExtractError::Parse(format!("not a valid PDF: {e}")))?;

        let pages = doc.get_pages();
        debug!("extracting text from {} PDF pages", pages.len());

        let mut page_texts = Vec::with_capacity(pages.len());
        for page_num in pages.keys() {
            // A page with no text layer yields an empty string, not an error.
            let text = match doc.extract_text(&[*page_num]) {
                Ok(text) => text,
                Err(e) => {
                    warn!("no text layer on page {}: {}", page_num, e);
                    String::new()
                }
            };
            let text = text.trim().to_string();
            if !text.is_empty() {
                page_texts.push(text);
            }
        }

        Ok(page_texts.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::content::{Content, Operation};
    use lopdf::{dictionary, Object, Stream};

    /// Build a minimal single-font PDF with one page of text per entry.
    fn build_pdf(pages: &[&str]) -> Vec<u8> {
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

        let mut kids = Vec::with_capacity(pages.len());
        for page_text in pages {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 24.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
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

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn test_supports_pdf_only() {
        let extractor = PdfExtractor::new();
        assert!(extractor.supports(MimeType::Pdf));
        assert!(!extractor.supports(MimeType::PlainText));
    }

    #[test]
    fn test_extract_single_page() {
        let bytes = build_pdf(&["the cat sat"]);
        let extractor = PdfExtractor::new();
        let text = extractor.extract(&bytes).unwrap();
        assert!(text.contains("the cat sat"), "got: {text:?}");
    }

    #[test]
    fn test_extract_pages_in_document_order() {
        let bytes = build_pdf(&["first page", "second page"]);
        let extractor = PdfExtractor::new();
        let text = extractor.extract(&bytes).unwrap();
        let first = text.find("first").expect("first page text missing");
        let second = text.find("second").expect("second page text missing");
        assert!(first < second);
    }

    #[test]
    fn test_extract_rejects_garbage() {
        let extractor = PdfExtractor::new();
        let err = extractor.extract(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }

    #[test]
    fn test_extract_rejects_empty_input() {
        let extractor = PdfExtractor::new();
        assert!(matches!(
            extractor.extract(b"").unwrap_err(),
            ExtractError::Parse(_)
        ));
    }
}
