//! # lexcloud-export
//!
//! Serialization of pipeline outputs into downloadable byte streams.
//!
//! Two independent operations, both pure:
//!
//! - [`ImageExporter::export`]: serialize a laid-out
//!   [`WordCloud`](lexcloud_core::WordCloud) as `png`, `jpeg`, `svg`, or
//!   `pdf` bytes
//! - [`export_frequency_table`]: serialize a
//!   [`FrequencyTable`](lexcloud_core::FrequencyTable) as CSV with a
//!   `Word,Count` header, always the full table and never the display view
//!
//! ## Backends
//!
//! | Format | Backend |
//! |--------|---------|
//! | `svg` | markup generation, no font needed |
//! | `pdf` | `printpdf` with a built-in base-14 font, no font files needed |
//! | `png` / `jpeg` | raster via `image` + `imageproc`, glyphs need a TTF |
//!
//! The raster path resolves a font from the configured path or common system
//! locations; a cloud with words and no resolvable font fails that export
//! with an encode error. Vector formats and the CSV export are unaffected.
//!
//! Unknown format tokens never reach this crate: parsing them into
//! [`ExportFormat`](lexcloud_core::ExportFormat) already fails with
//! `UnsupportedFormat`, leaving previously computed results untouched.

pub mod font;
pub mod pdf;
pub mod raster;
pub mod svg;
pub mod table;

pub use table::export_frequency_table;

use std::path::PathBuf;

use lexcloud_core::{ExportError, ExportFormat, WordCloud};

/// Word-cloud image exporter.
///
/// Holds only immutable configuration (an optional font path for the raster
/// formats); every export recomputes its output from the cloud alone.
#[derive(Debug, Clone, Default)]
pub struct ImageExporter {
    font_path: Option<PathBuf>,
}

impl ImageExporter {
    /// Create an exporter that discovers a system font for raster formats.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific TTF/OTF for the raster formats.
    #[must_use]
    pub fn with_font_path(path: impl Into<PathBuf>) -> Self {
        Self {
            font_path: Some(path.into()),
        }
    }

    /// Serialize the cloud in the chosen format.
    pub fn export(&self, cloud: &WordCloud, format: ExportFormat) -> Result<Vec<u8>, ExportError> {
        match format {
            ExportFormat::Svg => Ok(svg::render_svg(cloud).into_bytes()),
            ExportFormat::Pdf => pdf::render_pdf(cloud),
            ExportFormat::Png | ExportFormat::Jpeg => {
                raster::encode(cloud, format, self.font_path.as_deref())
            }
        }
    }
}
