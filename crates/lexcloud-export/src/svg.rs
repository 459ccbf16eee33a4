//! SVG markup rendering.

use std::fmt::Write;

use lexcloud_core::WordCloud;

/// Render the cloud as standalone SVG markup.
///
/// Words become `<text>` elements positioned at their layout baselines, so
/// the output scales without rasterization and needs no font files.
pub fn render_svg(cloud: &WordCloud) -> String {
    let mut out = String::new();
    let (w, h) = (cloud.width, cloud.height);

    // Writing to a String cannot fail
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    out.push('\n');
    let _ = writeln!(
        out,
        r#"<rect width="100%" height="100%" fill="{}"/>"#,
        cloud.background
    );
    let _ = writeln!(
        out,
        r#"<rect x="0.5" y="0.5" width="{}" height="{}" fill="none" stroke="{}" stroke-width="1"/>"#,
        w.saturating_sub(1),
        h.saturating_sub(1),
        cloud.contour
    );

    for word in &cloud.words {
        let _ = writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" font-family="Helvetica, Arial, sans-serif" font-size="{:.1}" fill="{}">{}</text>"#,
            word.x,
            word.y,
            word.font_size,
            word.color,
            escape_text(&word.text)
        );
    }

    out.push_str("</svg>\n");
    out
}

/// Escape text content for XML.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            other => escaped.push(other),
        }
    }
    escaped
}
