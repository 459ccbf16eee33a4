//! Plain-text extractor.

use lexcloud_core::{ExtractError, MimeType, TextExtractor};

/// Extractor for `text/plain` uploads.
///
/// Decodes the bytes as strict UTF-8; invalid sequences fail the run with a
/// decode error rather than being replaced.
pub struct PlainTextExtractor;

impl PlainTextExtractor {
    /// Create a new plain-text extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PlainTextExtractor {
    fn supported_types(&self) -> &[MimeType] {
        &[MimeType::PlainText]
    }

    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError> {
        String::from_utf8(bytes.to_vec()).map_err(|e| {
            ExtractError::Decode(format!(
                "invalid UTF-8 at byte {}",
                e.utf8_error().valid_up_to()
            ))
        })
    }
}
