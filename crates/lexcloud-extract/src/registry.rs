//! Extractor registry: declared-type dispatch.

use std::collections::HashMap;
use std::sync::Arc;

use lexcloud_core::{ExtractError, MimeType, TextExtractor};

use crate::{DocxExtractor, PdfExtractor, PlainTextExtractor};

/// Registry of text extractors keyed by MIME type.
///
/// Dispatch happens strictly on the declared type; an unregistered type
/// fails before any extractor sees the bytes.
pub struct ExtractorRegistry {
    extractors: HashMap<MimeType, Arc<dyn TextExtractor>>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
        }
    }

    /// Create a registry with the three stock extractors registered.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(PlainTextExtractor::new());
        registry.register(PdfExtractor::new());
        registry.register(DocxExtractor::new());
        registry
    }

    /// Register an extractor for every type it supports.
    pub fn register<E: TextExtractor + 'static>(&mut self, extractor: E) {
        let extractor = Arc::new(extractor);
        for mime in extractor.supported_types() {
            self.extractors.insert(*mime, extractor.clone());
        }
    }

    /// Get the extractor for a MIME type.
    #[must_use]
    pub fn get(&self, mime_type: MimeType) -> Option<Arc<dyn TextExtractor>> {
        self.extractors.get(&mime_type).cloned()
    }

    /// Extract text from document bytes with the declared type's extractor.
    pub fn extract(&self, bytes: &[u8], mime_type: MimeType) -> Result<String, ExtractError> {
        let extractor = self
            .get(mime_type)
            .ok_or_else(|| ExtractError::UnsupportedType(mime_type.as_str().to_string()))?;

        extractor.extract(bytes)
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = ExtractorRegistry::new();
        assert!(registry.get(MimeType::PlainText).is_none());
    }

    #[test]
    fn test_register_extractor() {
        let mut registry = ExtractorRegistry::new();
        registry.register(PlainTextExtractor::new());
        assert!(registry.get(MimeType::PlainText).is_some());
        assert!(registry.get(MimeType::Pdf).is_none());
    }

    #[test]
    fn test_with_defaults_covers_all_types() {
        let registry = ExtractorRegistry::with_defaults();
        for mime in [MimeType::PlainText, MimeType::Pdf, MimeType::Docx] {
            assert!(registry.get(mime).is_some(), "missing extractor for {mime}");
        }
    }

    #[test]
    fn test_extract_dispatches_by_type() {
        let registry = ExtractorRegistry::with_defaults();
        let text = registry.extract(b"some words", MimeType::PlainText).unwrap();
        assert_eq!(text, "some words");
    }

    #[test]
    fn test_extract_unregistered_type_fails() {
        let registry = ExtractorRegistry::new();
        let err = registry.extract(b"bytes", MimeType::Pdf).unwrap_err();
        match err {
            ExtractError::UnsupportedType(mime) => assert_eq!(mime, "application/pdf"),
            other => panic!("expected UnsupportedType, got {other:?}"),
        }
    }

    #[test]
    fn test_extract_does_not_sniff_content() {
        // Dispatch is on the declared type, not the bytes: valid plain text
        // declared as PDF must fail in the PDF parser.
        let registry = ExtractorRegistry::with_defaults();
        let err = registry.extract(b"just some text", MimeType::Pdf).unwrap_err();
        assert!(matches!(err, ExtractError::Parse(_)));
    }
}
