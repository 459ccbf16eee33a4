//! Font resolution for the raster export path.

use std::path::{Path, PathBuf};

use ab_glyph::FontVec;
use lexcloud_core::ExportError;
use tracing::debug;

/// Locations probed when no font path is configured.
const SEARCH_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSans.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Find a usable TTF in the standard system locations.
#[must_use]
pub fn find_system_font() -> Option<PathBuf> {
    SEARCH_PATHS
        .iter()
        .map(|path| PathBuf::from(*path))
        .find(|p| p.is_file())
}

/// Load the configured font, or discover a system one.
///
/// Only the raster formats need glyph outlines; SVG and PDF exports never
/// call this.
pub fn resolve(configured: Option<&Path>) -> Result<FontVec, ExportError> {
    let path = match configured {
        Some(path) => path.to_path_buf(),
        None => find_system_font().ok_or_else(|| {
            ExportError::Encode(
                "no usable font found for raster export; configure one with a font path"
                    .to_string(),
            )
        })?,
    };

    debug!("loading raster font from {:?}", path);
    let bytes = std::fs::read(&path)
        .map_err(|e| ExportError::Encode(format!("cannot read font {}: {e}", path.display())))?;
    FontVec::try_from_vec(bytes)
        .map_err(|_| ExportError::Encode(format!("not a usable font: {}", path.display())))
}
