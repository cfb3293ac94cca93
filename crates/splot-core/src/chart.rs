// File: crates/splot-core/src/chart.rs
// Summary: Headless rendering pipeline using Skia CPU raster surfaces; draws 2D line figures.

use skia_safe as skia;
use tracing::{debug, info};

use crate::axis::{AxisStyle, Side, YAxis};
use crate::error::{Result, SplotError};
use crate::figure::{Figure, LineTrace};
use crate::geometry::{LinearMap, RectI32};
use crate::grid::linspace;
use crate::text::{format_tick, Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};
use crate::view::ViewState;

/// Gridlines per axis, including both edges.
const GRID_STEPS: usize = 6;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Draw title, tick labels and legend text. Off gives font-independent output.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn plot_rect(&self) -> RectI32 {
        RectI32::inside(self.width, self.height, &self.insets)
    }
}

/// Something that can draw itself onto a Skia canvas. Provides the raster outputs.
pub trait Render {
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions);

    /// Render into a fresh raster surface.
    fn render_surface(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        if opts.width <= 0 || opts.height <= 0 {
            return Err(SplotError::render(format!("invalid surface size {}x{}", opts.width, opts.height)));
        }
        let mut surface = skia::surfaces::raster_n32_premul((opts.width, opts.height))
            .ok_or_else(|| SplotError::render("failed to create raster surface"))?;
        self.draw(surface.canvas(), opts);
        Ok(surface)
    }

    /// Render and encode as PNG in memory.
    fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| SplotError::render("encode PNG failed"))?;
        debug!(bytes = data.len(), "encoded PNG");
        Ok(data.as_bytes().to_vec())
    }

    /// Render to a PNG at `output_png_path`, creating parent directories.
    fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let path = output_png_path.as_ref();
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, bytes)?;
        info!(path = %path.display(), "wrote PNG");
        Ok(())
    }

    /// Render to unpremultiplied RGBA8 pixels: (pixels, width, height, row stride in bytes).
    fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.render_surface(opts)?;
        let info = skia::ImageInfo::new(
            (opts.width, opts.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = opts.width as usize * 4;
        let mut pixels = vec![0u8; stride * opts.height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(SplotError::render("failed to read surface pixels"));
        }
        Ok((pixels, opts.width as u32, opts.height as u32, stride))
    }
}

impl Render for Figure {
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let rect = opts.plot_rect();
        let view = ViewState::from_figure(self);

        canvas.clear(theme.paper);
        canvas.draw_rect(to_rect(rect), &fill_paint(theme.plot_background));

        let (l, t, r, b) = (rect.left as f32, rect.top as f32, rect.right as f32, rect.bottom as f32);
        let sx = LinearMap::new(view.x.min, view.x.max, l, r);
        // The primary axis is always drawn; others only when a trace is bound to them.
        let y_axes: Vec<YScale> = [YAxis::Primary, YAxis::Secondary]
            .into_iter()
            .filter(|&axis| axis == YAxis::Primary || self.uses_axis(axis))
            .map(|axis| {
                let range = view.y_for(axis);
                let style = self.layout.y_style(axis);
                let px = match style.side {
                    Side::Right => r,
                    Side::Left | Side::Bottom => l,
                };
                YScale {
                    axis,
                    style,
                    map: LinearMap::new(range.min, range.max, b, t),
                    ticks: linspace(range.min, range.max, GRID_STEPS),
                    px,
                }
            })
            .collect();

        // Grid. Overlaying axes share the grid of the axis they sit on.
        let x_style = &self.layout.x_axis;
        let x_ticks = linspace(view.x.min, view.x.max, GRID_STEPS);
        let grid = stroke_paint(x_style.grid_color.into(), 1.0);
        for &x in &x_ticks {
            let px = sx.to_px(x);
            canvas.draw_line((px, t), (px, b), &grid);
        }
        for y in y_axes.iter().filter(|y| y.style.overlaying.is_none()) {
            let grid = stroke_paint(y.style.grid_color.into(), 1.0);
            for &v in &y.ticks {
                let py = y.map.to_px(v);
                canvas.draw_line((l, py), (r, py), &grid);
            }
        }

        // Zero lines
        if view.x.min < 0.0 && view.x.max > 0.0 {
            let px = sx.to_px(0.0);
            canvas.draw_line((px, t), (px, b), &stroke_paint(x_style.zero_line_color.into(), 2.0));
        }
        for y in y_axes.iter().filter(|y| y.style.overlaying.is_none()) {
            let range = view.y_for(y.axis);
            if range.min < 0.0 && range.max > 0.0 {
                let py = y.map.to_px(0.0);
                canvas.draw_line((l, py), (r, py), &stroke_paint(y.style.zero_line_color.into(), 2.0));
            }
        }

        // Axes
        let axis_paint = stroke_paint(theme.axis_line, 1.5);
        canvas.draw_line((l, b), (r, b), &axis_paint);
        for y in &y_axes {
            canvas.draw_line((y.px, t), (y.px, b), &axis_paint);
        }

        // Traces, clipped to the plot area
        canvas.save();
        canvas.clip_rect(to_rect(rect), None, true);
        for trace in &self.traces {
            if let Some(y) = y_axes.iter().find(|y| y.axis == trace.axis) {
                draw_line_trace(canvas, trace, &sx, &y.map);
            }
        }
        canvas.restore();

        if !opts.draw_labels {
            return;
        }

        let text = TextShaper::new();
        for &x in &x_ticks {
            text.draw(canvas, &format_tick(x), sx.to_px(x), b + 20.0, Anchor::Center, 12.0, theme.tick, true);
        }
        for y in &y_axes {
            let (dx, anchor) = match y.style.side {
                Side::Right => (8.0, Anchor::Left),
                Side::Left | Side::Bottom => (-8.0, Anchor::Right),
            };
            for &v in &y.ticks {
                text.draw(canvas, &format_tick(v), y.px + dx, y.map.to_px(v) + 4.0, anchor, 12.0, theme.tick, true);
            }
        }
        if !self.layout.title.is_empty() {
            let cx = opts.width as f32 * 0.5;
            text.draw(canvas, &self.layout.title, cx, t * 0.5 + 9.0, Anchor::Center, 18.0, theme.title, false);
        }
        draw_legend(canvas, &text, self, rect, theme);
    }
}

/// One drawn y-axis: its layout style, value-to-pixel map, tick values and the x pixel of its line.
struct YScale<'a> {
    axis: YAxis,
    style: &'a AxisStyle,
    map: LinearMap,
    ticks: Vec<f64>,
    px: f32,
}

fn draw_line_trace(canvas: &skia::Canvas, trace: &LineTrace, sx: &LinearMap, sy: &LinearMap) {
    // Non-finite samples break the line into separate segments.
    let mut path = skia::Path::new();
    let mut pen_down = false;
    for (x, y) in trace.points() {
        if !x.is_finite() || !y.is_finite() {
            pen_down = false;
            continue;
        }
        let p = (sx.to_px(x), sy.to_px(y));
        if pen_down {
            path.line_to(p);
        } else {
            path.move_to(p);
            pen_down = true;
        }
    }
    let mut stroke = stroke_paint(trace.color.into(), 2.0);
    stroke.set_stroke_join(skia::paint::Join::Round);
    canvas.draw_path(&path, &stroke);
}

fn draw_legend(canvas: &skia::Canvas, text: &TextShaper, fig: &Figure, rect: RectI32, theme: &Theme) {
    if fig.traces.is_empty() {
        return;
    }
    let row_h = 18.0f32;
    let swatch = 22.0f32;
    let pad = 8.0f32;
    let label_w = fig
        .traces
        .iter()
        .map(|t| text.measure_width(&t.name, 12.0, false))
        .fold(0.0f32, f32::max);
    let w = pad * 3.0 + swatch + label_w;
    let h = pad * 2.0 + row_h * fig.traces.len() as f32;
    let right = rect.right as f32 - pad;
    let top = rect.top as f32 + pad;
    let bg = skia::Rect::from_ltrb(right - w, top, right, top + h);
    canvas.draw_rect(bg, &fill_paint(theme.legend_background));

    for (i, trace) in fig.traces.iter().enumerate() {
        let y = top + pad + row_h * (i as f32 + 0.5);
        let x0 = bg.left + pad;
        canvas.draw_line((x0, y), (x0 + swatch, y), &stroke_paint(trace.color.into(), 2.0));
        text.draw(canvas, &trace.name, x0 + swatch + pad, y + 4.0, Anchor::Left, 12.0, theme.axis_label, false);
    }
}

// ---- helpers ----------------------------------------------------------------

pub(crate) fn to_rect(r: RectI32) -> skia::Rect {
    skia::Rect::from_ltrb(r.left as f32, r.top as f32, r.right as f32, r.bottom as f32)
}

pub(crate) fn stroke_paint(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(color);
    paint
}

pub(crate) fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(color);
    paint
}
