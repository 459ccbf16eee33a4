//! Row-flow word placement.

use lexcloud_core::{
    CloudLayoutEngine, FrequencyTable, PlacedWord, RenderError, RenderParameters, Rgb, WordCloud,
};
use tracing::debug;

/// Smallest font used for the least frequent words.
const MIN_FONT: f32 = 12.0;
/// Average glyph width as a fraction of the font size.
const CHAR_WIDTH_RATIO: f32 = 0.5;
/// Vertical spacing between rows as a fraction of the row height.
const LINE_SPACING: f32 = 1.25;
/// Canvas padding on all sides, in pixels.
const MARGIN: f32 = 10.0;
/// Approximate ascent as a fraction of the font size.
const ASCENT_RATIO: f32 = 0.8;

/// Word colors, cycled in placement order.
const PALETTE: [Rgb; 6] = [
    Rgb::new(0x1f, 0x77, 0xb4),
    Rgb::new(0xd6, 0x27, 0x28),
    Rgb::new(0x2c, 0xa0, 0x2c),
    Rgb::new(0x94, 0x67, 0xbd),
    Rgb::new(0xff, 0x7f, 0x0e),
    Rgb::new(0x17, 0xbe, 0xcf),
];

/// Deterministic row-flow layout engine.
///
/// Words are placed left to right in rows, largest counts first, with font
/// size scaled linearly by each word's share of the top count. Placement
/// stops when the next row would leave the canvas; the words that fit are
/// the cloud.
pub struct FlowLayoutEngine;

impl FlowLayoutEngine {
    /// Create a new flow layout engine.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for FlowLayoutEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CloudLayoutEngine for FlowLayoutEngine {
    fn name(&self) -> &str {
        "flow"
    }

    fn layout(
        &self,
        table: &FrequencyTable,
        params: &RenderParameters,
    ) -> Result<WordCloud, RenderError> {
        if params.width == 0 || params.height == 0 {
            return Err(RenderError::Failed("zero-sized canvas".to_string()));
        }

        let entries = table.top(params.max_words);
        let mut cloud = WordCloud {
            width: params.width,
            height: params.height,
            background: params.background,
            contour: params.contour,
            words: Vec::with_capacity(entries.len()),
        };

        let Some(top) = entries.first() else {
            return Ok(cloud);
        };
        let top_count = top.count;

        let width = params.width as f32;
        let height = params.height as f32;
        let max_font = (height / 5.0).max(MIN_FONT + 4.0);

        let mut x = MARGIN;
        let mut row_top = MARGIN;
        let mut row_height = 0.0f32;

        for (i, entry) in entries.iter().enumerate() {
            let font_size = scaled_font_size(entry.count, top_count, max_font);
            let word_width = estimate_text_width(&entry.word, font_size);

            // Wrap when the word would overflow the row
            if x > MARGIN && x + word_width > width - MARGIN {
                row_top += row_height * LINE_SPACING;
                x = MARGIN;
                row_height = 0.0;
            }

            // Out of vertical space: the cloud is full
            if row_top + font_size > height - MARGIN {
                debug!(
                    "canvas full after {} of {} words",
                    cloud.words.len(),
                    entries.len()
                );
                break;
            }

            cloud.words.push(PlacedWord {
                text: entry.word.clone(),
                count: entry.count,
                x,
                y: row_top + font_size * ASCENT_RATIO,
                font_size,
                color: PALETTE[i % PALETTE.len()],
            });

            row_height = row_height.max(font_size);
            x += word_width + font_size * 0.35;
        }

        Ok(cloud)
    }
}

/// Font size for a word with `count` occurrences, scaled against the most
/// frequent word.
fn scaled_font_size(count: u64, top_count: u64, max_font: f32) -> f32 {
    let ratio = count as f32 / top_count.max(1) as f32;
    MIN_FONT + (max_font - MIN_FONT) * ratio
}

/// Estimate rendered text width from the font size.
fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * CHAR_WIDTH_RATIO
}
