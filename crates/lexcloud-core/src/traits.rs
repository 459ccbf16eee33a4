//! Capability traits for lexcloud collaborators.
//!
//! Two seams keep the heavyweight collaborators substitutable:
//!
//! - [`TextExtractor`]: format-specific text extraction from document bytes
//! - [`CloudLayoutEngine`]: word placement on the cloud canvas
//!
//! The shipped implementations live in `lexcloud-extract` and
//! `lexcloud-render`; test doubles implement the same traits.

use crate::error::{ExtractError, RenderError};
use crate::types::{FrequencyTable, MimeType, RenderParameters, WordCloud};

// ============================================================================
// Text extraction
// ============================================================================

/// Trait for extracting text from document bytes.
///
/// Extraction is synchronous and pure: the same bytes always yield the same
/// text or the same error.
pub trait TextExtractor: Send + Sync {
    /// The MIME types this extractor handles.
    fn supported_types(&self) -> &[MimeType];

    /// Check if this extractor handles the given type.
    fn supports(&self, mime_type: MimeType) -> bool {
        self.supported_types().contains(&mime_type)
    }

    /// Extract text from raw document bytes.
    fn extract(&self, bytes: &[u8]) -> Result<String, ExtractError>;
}

// ============================================================================
// Cloud layout
// ============================================================================

/// Trait for laying out a word cloud from a frequency table.
///
/// The layout algorithm itself is an external concern; any engine that
/// places at most `params.max_words` words on a `params.width` ×
/// `params.height` canvas satisfies the contract.
pub trait CloudLayoutEngine: Send + Sync {
    /// Name of this layout engine.
    fn name(&self) -> &str;

    /// Place the most frequent words on the canvas.
    fn layout(
        &self,
        table: &FrequencyTable,
        params: &RenderParameters,
    ) -> Result<WordCloud, RenderError>;
}
