//! Core types for lexcloud.
//!
//! This module contains the shared data structures used across lexcloud:
//!
//! ## Input
//! - [`Document`]: an uploaded file with its declared type
//! - [`MimeType`]: the closed set of accepted upload types
//!
//! ## Analysis
//! - [`FrequencyEntry`] / [`FrequencyTable`]: distinct tokens with counts
//!
//! ## Rendering
//! - [`RenderParameters`]: canvas size, colors, word cap
//! - [`Rgb`]: a color parsed from `#RRGGBB` hex
//! - [`PlacedWord`] / [`WordCloud`]: the laid-out cloud
//! - [`ExportFormat`]: the closed set of image export formats

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, ExportError, ExtractError};

// ============================================================================
// Documents
// ============================================================================

/// MIME types accepted at the upload boundary.
///
/// Any other declared type is rejected with
/// [`ExtractError::UnsupportedType`] before extraction is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MimeType {
    /// `text/plain`
    PlainText,
    /// `application/pdf`
    Pdf,
    /// `application/vnd.openxmlformats-officedocument.wordprocessingml.document`
    Docx,
}

impl MimeType {
    /// The canonical MIME string for this type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PlainText => "text/plain",
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Parse a declared MIME string.
    pub fn from_declared(mime: &str) -> Result<Self, ExtractError> {
        match mime {
            "text/plain" => Ok(Self::PlainText),
            "application/pdf" => Ok(Self::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Ok(Self::Docx)
            }
            other => Err(ExtractError::UnsupportedType(other.to_string())),
        }
    }

    /// Infer a declared type from a file extension.
    pub fn from_extension(ext: &str) -> Result<Self, ExtractError> {
        match ext.to_lowercase().as_str() {
            "txt" => Ok(Self::PlainText),
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            other => Err(ExtractError::UnsupportedType(format!(".{other}"))),
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An uploaded document.
///
/// Immutable once constructed; one per run, discarded afterwards.
#[derive(Debug, Clone)]
pub struct Document {
    /// Original file name
    pub name: String,
    /// Size of the raw bytes
    pub size_bytes: u64,
    /// Declared MIME type
    pub mime_type: MimeType,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl Document {
    /// Create a document from its name, declared type, and raw bytes.
    #[must_use]
    pub fn new(name: impl Into<String>, mime_type: MimeType, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size_bytes: bytes.len() as u64,
            mime_type,
            bytes,
        }
    }
}

// ============================================================================
// Frequency table
// ============================================================================

/// One distinct token and its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub word: String,
    pub count: u64,
}

/// Distinct tokens with counts, sorted by count descending.
///
/// Ties keep the order in which the words first appeared in the filtered
/// text. Built fresh per run by `lexcloud-analyze`; never mutated in place.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrequencyTable {
    pub entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Number of distinct words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A borrowed view of the first `n` entries.
    ///
    /// Truncation for display is a view operation; the underlying table
    /// always holds the full set.
    #[must_use]
    pub fn top(&self, n: usize) -> &[FrequencyEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FrequencyEntry> {
        self.entries.iter()
    }
}

// ============================================================================
// Render parameters
// ============================================================================

/// An RGB color, parsed from and displayed as `#RRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const WHITE: Self = Self::new(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::new(0x00, 0x00, 0x00);
}

impl Default for Rgb {
    fn default() -> Self {
        Self::WHITE
    }
}

impl FromStr for Rgb {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(Error::Config(format!(
                "invalid color '{s}': expected #RRGGBB"
            )));
        }
        // Length and digits were just checked
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Ok(Self { r, g, b })
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Layout parameters for the cloud canvas.
///
/// Defaults match the sidebar defaults of the interactive shell; values
/// outside the declared ranges are configuration errors.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderParameters {
    /// Canvas width in pixels (400-2000)
    pub width: u32,
    /// Canvas height in pixels (200-2000)
    pub height: u32,
    /// Canvas background color
    pub background: Rgb,
    /// Contour (border) color, drawn one pixel wide
    pub contour: Rgb,
    /// Maximum number of words placed (50-500)
    pub max_words: usize,
}

impl RenderParameters {
    pub const WIDTH_RANGE: std::ops::RangeInclusive<u32> = 400..=2000;
    pub const HEIGHT_RANGE: std::ops::RangeInclusive<u32> = 200..=2000;
    pub const MAX_WORDS_RANGE: std::ops::RangeInclusive<usize> = 50..=500;

    /// Check the declared ranges.
    pub fn validate(&self) -> Result<(), Error> {
        if !Self::WIDTH_RANGE.contains(&self.width) {
            return Err(Error::Config(format!(
                "width {} out of range {}-{}",
                self.width,
                Self::WIDTH_RANGE.start(),
                Self::WIDTH_RANGE.end()
            )));
        }
        if !Self::HEIGHT_RANGE.contains(&self.height) {
            return Err(Error::Config(format!(
                "height {} out of range {}-{}",
                self.height,
                Self::HEIGHT_RANGE.start(),
                Self::HEIGHT_RANGE.end()
            )));
        }
        if !Self::MAX_WORDS_RANGE.contains(&self.max_words) {
            return Err(Error::Config(format!(
                "max words {} out of range {}-{}",
                self.max_words,
                Self::MAX_WORDS_RANGE.start(),
                Self::MAX_WORDS_RANGE.end()
            )));
        }
        Ok(())
    }
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Rgb::WHITE,
            contour: Rgb::new(0x00, 0x7b, 0xff),
            max_words: 200,
        }
    }
}

// ============================================================================
// Word cloud
// ============================================================================

/// A word placed on the cloud canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedWord {
    pub text: String,
    /// Occurrence count the font size was derived from
    pub count: u64,
    /// Left edge in pixels
    pub x: f32,
    /// Text baseline in pixels, measured from the canvas top
    pub y: f32,
    pub font_size: f32,
    pub color: Rgb,
}

/// A laid-out word cloud in vector form.
///
/// Produced by a [`CloudLayoutEngine`](crate::traits::CloudLayoutEngine) and
/// serialized by `lexcloud-export`.
#[derive(Debug, Clone, Default)]
pub struct WordCloud {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub contour: Rgb,
    pub words: Vec<PlacedWord>,
}

// ============================================================================
// Export formats
// ============================================================================

/// Image export formats.
///
/// Parsing any other token fails with [`ExportError::UnsupportedFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
    Svg,
    Pdf,
}

impl ExportFormat {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Svg => "svg",
            Self::Pdf => "pdf",
        }
    }

    /// File extension for the format.
    #[must_use]
    pub fn extension(&self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "png" => Ok(Self::Png),
            "jpeg" | "jpg" => Ok(Self::Jpeg),
            "svg" => Ok(Self::Svg),
            "pdf" => Ok(Self::Pdf),
            other => Err(ExportError::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
