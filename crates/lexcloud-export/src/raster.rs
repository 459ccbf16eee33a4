//! Raster (png/jpeg) rendering and encoding.

use std::io::Cursor;
use std::path::Path;

use ab_glyph::PxScale;
use image::{DynamicImage, RgbImage};
use imageproc::drawing::{draw_hollow_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use lexcloud_core::{ExportError, ExportFormat, WordCloud};
use tracing::debug;

use crate::font;

/// Matches the layout engine's ascent estimate: baseline → glyph top.
const ASCENT_RATIO: f32 = 0.8;

/// Rasterize the cloud and encode it in the chosen raster format.
pub fn encode(
    cloud: &WordCloud,
    format: ExportFormat,
    font_path: Option<&Path>,
) -> Result<Vec<u8>, ExportError> {
    let img = rasterize(cloud, font_path)?;

    let image_format = match format {
        ExportFormat::Png => image::ImageFormat::Png,
        ExportFormat::Jpeg => image::ImageFormat::Jpeg,
        other => {
            return Err(ExportError::Encode(format!(
                "{other} is not a raster format"
            )));
        }
    };

    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut bytes), image_format)
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    Ok(bytes)
}

/// Paint background, contour, and word glyphs onto a pixel buffer.
///
/// The font is only resolved when there are words to draw, so an empty
/// cloud exports on fontless hosts.
fn rasterize(cloud: &WordCloud, font_path: Option<&Path>) -> Result<RgbImage, ExportError> {
    let (w, h) = (cloud.width.max(1), cloud.height.max(1));
    let mut img = RgbImage::from_pixel(w, h, pixel(cloud.background));

    draw_hollow_rect_mut(
        &mut img,
        Rect::at(0, 0).of_size(w, h),
        pixel(cloud.contour),
    );

    if cloud.words.is_empty() {
        return Ok(img);
    }

    let font = font::resolve(font_path)?;
    debug!("rasterizing {} words at {}x{}", cloud.words.len(), w, h);

    for word in &cloud.words {
        let top = word.y - word.font_size * ASCENT_RATIO;
        draw_text_mut(
            &mut img,
            pixel(word.color),
            word.x as i32,
            top as i32,
            PxScale::from(word.font_size),
            &font,
            &word.text,
        );
    }

    Ok(img)
}

fn pixel(color: lexcloud_core::Rgb) -> image::Rgb<u8> {
    image::Rgb([color.r, color.g, color.b])
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexcloud_core::{PlacedWord, Rgb};

    fn empty_cloud() -> WordCloud {
        WordCloud {
            width: 120,
            height: 80,
            background: Rgb::WHITE,
            contour: Rgb::new(0x00, 0x7b, 0xff),
            words: vec![],
        }
    }

    #[test]
    fn test_rasterize_fills_background() {
        let img = rasterize(&empty_cloud(), None).unwrap();
        assert_eq!(img.dimensions(), (120, 80));
        assert_eq!(img.get_pixel(60, 40), &image::Rgb([0xff, 0xff, 0xff]));
    }

    #[test]
    fn test_rasterize_draws_one_pixel_contour() {
        let img = rasterize(&empty_cloud(), None).unwrap();
        let contour = image::Rgb([0x00, 0x7b, 0xff]);
        assert_eq!(img.get_pixel(0, 0), &contour);
        assert_eq!(img.get_pixel(119, 79), &contour);
        assert_eq!(img.get_pixel(60, 0), &contour);
        // One pixel wide: the next row in is background again
        assert_eq!(img.get_pixel(60, 1), &image::Rgb([0xff, 0xff, 0xff]));
    }

    #[test]
    fn test_encode_png_round_trips_dimensions() {
        let bytes = encode(&empty_cloud(), ExportFormat::Png, None).unwrap();
        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.width(), 120);
        assert_eq!(decoded.height(), 80);
    }

    #[test]
    fn test_encode_jpeg_produces_jpeg_magic() {
        let bytes = encode(&empty_cloud(), ExportFormat::Jpeg, None).unwrap();
        assert_eq!(&bytes[..2], [0xff, 0xd8]);
    }

    #[test]
    fn test_encode_with_words_needs_a_font() {
        let mut cloud = empty_cloud();
        cloud.words.push(PlacedWord {
            text: "cat".to_string(),
            count: 2,
            x: 10.0,
            y: 30.0,
            font_size: 20.0,
            color: Rgb::BLACK,
        });

        match encode(&cloud, ExportFormat::Png, None) {
            // A system font was found and the words rendered
            Ok(bytes) => assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n"),
            // Fontless host: the raster export fails, nothing else does
            Err(ExportError::Encode(msg)) => assert!(msg.contains("font")),
            Err(other) => panic!("unexpected error: {other:?}"),
        }
    }
}
