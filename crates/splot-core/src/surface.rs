// File: crates/splot-core/src/surface.rs
// Summary: 3D surface rendering; projects height-maps with a fixed camera and paints quads back to front.

use skia_safe as skia;

use crate::chart::{fill_paint, stroke_paint, Render, RenderOptions};
use crate::color::{height_color, trace_color};
use crate::figure::{SurfaceFigure, SurfaceTrace};
use crate::geometry::RectI32;
use crate::series::extent;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;

/// Camera azimuth around the vertical axis, in degrees.
const AZIMUTH_DEG: f64 = -35.0;
/// Camera elevation above the floor plane, in degrees.
const ELEVATION_DEG: f64 = 28.0;
/// Height of the z extent relative to the unit floor.
const Z_ASPECT: f64 = 0.7;

/// Normalized bounding box shared by every surface in a figure.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Bounds {
    x: (f64, f64),
    y: (f64, f64),
    z: (f64, f64),
}

impl Bounds {
    fn of(fig: &SurfaceFigure) -> Option<Self> {
        let x = extent(fig.surfaces.iter().flat_map(|s| s.x.iter().copied()))?;
        let y = extent(fig.surfaces.iter().flat_map(|s| s.y.iter().copied()))?;
        let z = extent(fig.surfaces.iter().flat_map(|s| s.z.iter().flatten().copied()))?;
        Some(Self { x, y, z })
    }

    /// Map a world point into the unit cube centred on the origin.
    fn unit(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        (norm(x, self.x) - 0.5, norm(y, self.y) - 0.5, (norm(z, self.z) - 0.5) * Z_ASPECT)
    }

    fn z_fraction(&self, z: f64) -> f64 { norm(z, self.z) }
}

fn norm(v: f64, (lo, hi): (f64, f64)) -> f64 {
    let span = hi - lo;
    if span.abs() < 1e-12 { 0.5 } else { (v - lo) / span }
}

/// Fixed orthographic camera.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    cos_az: f64,
    sin_az: f64,
    cos_el: f64,
    sin_el: f64,
}

impl Camera {
    pub fn new(azimuth_deg: f64, elevation_deg: f64) -> Self {
        let (sin_az, cos_az) = azimuth_deg.to_radians().sin_cos();
        let (sin_el, cos_el) = elevation_deg.to_radians().sin_cos();
        Self { cos_az, sin_az, cos_el, sin_el }
    }

    /// Project a centred unit-cube point to (right, up, depth). Larger depth is farther away.
    pub fn project(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        let rx = x * self.cos_az - y * self.sin_az;
        let ry = x * self.sin_az + y * self.cos_az;
        let up = z * self.cos_el + ry * self.sin_el;
        let depth = ry * self.cos_el - z * self.sin_el;
        (rx, up, depth)
    }
}

impl Default for Camera {
    fn default() -> Self { Self::new(AZIMUTH_DEG, ELEVATION_DEG) }
}

struct Quad {
    corners: [(f32, f32); 4],
    depth: f64,
    color: skia::Color,
}

struct Screen {
    cx: f32,
    cy: f32,
    scale: f32,
}

impl Screen {
    fn to_px(&self, (right, up): (f64, f64)) -> (f32, f32) {
        (self.cx + right as f32 * self.scale, self.cy - up as f32 * self.scale)
    }
}

fn collect_quads(trace: &SurfaceTrace, bounds: &Bounds, cam: &Camera, screen: &Screen, out: &mut Vec<Quad>) {
    let rows = trace.z.len().min(trace.y.len());
    for j in 0..rows.saturating_sub(1) {
        let cols = trace.z[j].len().min(trace.z[j + 1].len()).min(trace.x.len());
        for i in 0..cols.saturating_sub(1) {
            let cells = [(i, j), (i + 1, j), (i + 1, j + 1), (i, j + 1)];
            let zs = cells.map(|(ci, cj)| trace.z[cj][ci]);
            if zs.iter().any(|z| !z.is_finite()) {
                continue;
            }
            let mut depth = 0.0;
            let mut corners = [(0.0f32, 0.0f32); 4];
            for (k, &(ci, cj)) in cells.iter().enumerate() {
                let (ux, uy, uz) = bounds.unit(trace.x[ci], trace.y[cj], zs[k]);
                let (right, up, d) = cam.project(ux, uy, uz);
                corners[k] = screen.to_px((right, up));
                depth += d;
            }
            let mean_z = zs.iter().sum::<f64>() / 4.0;
            out.push(Quad {
                corners,
                depth: depth / 4.0,
                color: height_color(bounds.z_fraction(mean_z)).into(),
            });
        }
    }
}

fn draw_surfaces(canvas: &skia::Canvas, fig: &SurfaceFigure, bounds: &Bounds, rect: RectI32, theme: &Theme) {
    let cam = Camera::default();
    let screen = Screen {
        cx: (rect.left + rect.right) as f32 * 0.5,
        cy: (rect.top + rect.bottom) as f32 * 0.5,
        scale: (rect.width() as f32 / 1.5).min(rect.height() as f32 / 1.4),
    };

    // Floor outline at the lowest z.
    let floor = [(-0.5, -0.5), (0.5, -0.5), (0.5, 0.5), (-0.5, 0.5)].map(|(x, y)| {
        let (right, up, _) = cam.project(x, y, -0.5 * Z_ASPECT);
        screen.to_px((right, up))
    });
    let mut floor_path = skia::Path::new();
    floor_path.move_to(floor[0]);
    for &p in &floor[1..] {
        floor_path.line_to(p);
    }
    floor_path.close();
    canvas.draw_path(&floor_path, &fill_paint(theme.plot_background));
    canvas.draw_path(&floor_path, &stroke_paint(theme.axis_line, 1.0));

    let mut quads = Vec::new();
    for trace in &fig.surfaces {
        collect_quads(trace, bounds, &cam, &screen, &mut quads);
    }
    quads.sort_by(|a, b| b.depth.total_cmp(&a.depth));

    let edge = stroke_paint(theme.surface_edge, 0.75);
    for q in &quads {
        let mut path = skia::Path::new();
        path.move_to(q.corners[0]);
        for &p in &q.corners[1..] {
            path.line_to(p);
        }
        path.close();
        canvas.draw_path(&path, &fill_paint(q.color));
        canvas.draw_path(&path, &edge);
    }
}

impl Render for SurfaceFigure {
    fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        let theme = &opts.theme;
        let rect = opts.plot_rect();
        canvas.clear(theme.paper);

        let text = opts.draw_labels.then(TextShaper::new);
        if let Some(text) = &text {
            if !self.title.is_empty() {
                let y = rect.top as f32 * 0.5 + 9.0;
                text.draw(canvas, &self.title, opts.width as f32 * 0.5, y, Anchor::Center, 18.0, theme.title, false);
            }
        }

        // With no finite height there is nothing to project; title and legend still show.
        if let Some(bounds) = Bounds::of(self) {
            draw_surfaces(canvas, self, &bounds, rect, theme);
        }

        if let Some(text) = &text {
            let n = self.surfaces.len();
            for (i, s) in self.surfaces.iter().enumerate() {
                let y = rect.top as f32 + 16.0 + 18.0 * i as f32;
                let x = rect.right as f32;
                canvas.draw_line((x - 140.0, y - 4.0), (x - 118.0, y - 4.0), &stroke_paint(trace_color(i + 1, n).into(), 3.0));
                text.draw(canvas, &s.name, x - 110.0, y, Anchor::Left, 12.0, theme.axis_label, false);
            }
        }
    }
}
