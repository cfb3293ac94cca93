// File: crates/splot-core/src/text.rs
// Summary: Text shaping for titles, tick labels and legend entries via Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor for a text run relative to the given x.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, mono_numeric: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        if mono_numeric {
            ts.set_font_families(&["Roboto Mono", "Consolas", "Menlo", "DejaVu Sans Mono", "monospace"]);
        } else {
            ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        }
        ts
    }

    fn layout(&self, text: &str, size: f32, color: skia::Color, mono_numeric: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, mono_numeric));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    pub fn measure_width(&self, text: &str, size: f32, mono_numeric: bool) -> f32 {
        self.layout(text, size, skia::Color::TRANSPARENT, mono_numeric).longest_line()
    }

    /// Draw `text` with its baseline at `y`, anchored at `x`.
    #[allow(clippy::too_many_arguments)]
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        x: f32,
        y: f32,
        anchor: Anchor,
        size: f32,
        color: skia::Color,
        mono_numeric: bool,
    ) {
        let mut p = self.layout(text, size, color, mono_numeric);
        let w = p.longest_line();
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - w * 0.5,
            Anchor::Right => x - w,
        };
        // Paragraph paints from its top-left corner; shift up by roughly the ascent.
        p.paint(canvas, (left, y - size * 0.8));
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}

/// Compact tick label: trims trailing zeros, switches to exponent form for extreme magnitudes.
pub fn format_tick(v: f64) -> String {
    if v == 0.0 { return "0".to_string(); }
    if !v.is_finite() { return format!("{v}"); }
    let a = v.abs();
    if !(1e-3..1e5).contains(&a) {
        return format!("{v:.2e}");
    }
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
