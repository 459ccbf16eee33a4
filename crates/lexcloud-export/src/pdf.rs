//! Single-page vector PDF rendering.
//!
//! Uses printpdf with a built-in base-14 font, so the PDF export works
//! without any font files on the host.

use std::io::BufWriter;

use lexcloud_core::{ExportError, WordCloud};
use printpdf::{BuiltinFont, Line, Mm, PdfDocument, Point};

/// Points to millimeters; layout pixels are treated as points.
const PT_TO_MM: f64 = 0.352_778;

/// Render the cloud as a single-page PDF.
pub fn render_pdf(cloud: &WordCloud) -> Result<Vec<u8>, ExportError> {
    let page_w = Mm(f64::from(cloud.width) * PT_TO_MM);
    let page_h = Mm(f64::from(cloud.height) * PT_TO_MM);

    let (doc, page_idx, layer_idx) = PdfDocument::new("Word Cloud", page_w, page_h, "cloud");
    let layer = doc.get_page(page_idx).get_layer(layer_idx);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Encode(e.to_string()))?;

    // Background with a one-point contour outline
    layer.set_fill_color(color(cloud.background));
    layer.set_outline_color(color(cloud.contour));
    layer.set_outline_thickness(1.0);
    layer.add_shape(Line {
        points: vec![
            (Point::new(Mm(0.0), Mm(0.0)), false),
            (Point::new(page_w, Mm(0.0)), false),
            (Point::new(page_w, page_h), false),
            (Point::new(Mm(0.0), page_h), false),
        ],
        is_closed: true,
        has_fill: true,
        has_stroke: true,
        is_clipping_path: false,
    });

    // PDF y-axis grows upward; layout baselines are measured from the top
    for word in &cloud.words {
        layer.set_fill_color(color(word.color));
        let x = Mm(f64::from(word.x) * PT_TO_MM);
        let y = Mm(f64::from(cloud.height as f32 - word.y) * PT_TO_MM);
        layer.use_text(
            word.text.clone(),
            f64::from(word.font_size),
            x,
            y,
            &font,
        );
    }

    let mut bytes = Vec::new();
    doc.save(&mut BufWriter::new(&mut bytes))
        .map_err(|e| ExportError::Encode(e.to_string()))?;
    Ok(bytes)
}

fn color(c: lexcloud_core::Rgb) -> printpdf::Color {
    printpdf::Color::Rgb(printpdf::Rgb::new(
        f64::from(c.r) / 255.0,
        f64::from(c.g) / 255.0,
        f64::from(c.b) / 255.0,
        None,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lexcloud_core::{PlacedWord, Rgb};

    fn cloud() -> WordCloud {
        WordCloud {
            width: 800,
            height: 600,
            background: Rgb::WHITE,
            contour: Rgb::new(0x00, 0x7b, 0xff),
            words: vec![PlacedWord {
                text: "cat".to_string(),
                count: 2,
                x: 10.0,
                y: 106.0,
                font_size: 96.0,
                color: Rgb::BLACK,
            }],
        }
    }

    #[test]
    fn test_render_pdf_has_magic_and_eof() {
        let bytes = render_pdf(&cloud()).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        let tail = String::from_utf8_lossy(&bytes[bytes.len().saturating_sub(64)..]).to_string();
        assert!(tail.contains("%%EOF"));
    }

    #[test]
    fn test_render_pdf_empty_cloud() {
        let mut empty = cloud();
        empty.words.clear();
        let bytes = render_pdf(&empty).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_pdf_mentions_helvetica() {
        let bytes = render_pdf(&cloud()).unwrap();
        let text = String::from_utf8_lossy(&bytes).to_string();
        assert!(text.contains("Helvetica"));
    }
}
