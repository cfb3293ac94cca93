// File: crates/splot-core/src/geometry.rs
// Summary: Pixel rectangle helpers and world-to-screen mapping.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Area of a `width` x `height` surface left after removing `insets`.
    /// Collapses to a zero-size rect rather than inverting when insets are too large.
    pub fn inside(width: i32, height: i32, insets: &Insets) -> Self {
        let left = (insets.left as i32).min(width);
        let top = (insets.top as i32).min(height);
        let right = (width - insets.right as i32).max(left);
        let bottom = (height - insets.bottom as i32).max(top);
        Self { left, top, right, bottom }
    }

    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}

/// Linear map from a value range onto a pixel span.
#[derive(Clone, Copy, Debug)]
pub struct LinearMap {
    pub vmin: f64,
    pub vmax: f64,
    pub px0: f32,
    pub px1: f32,
}

impl LinearMap {
    pub fn new(vmin: f64, vmax: f64, px0: f32, px1: f32) -> Self {
        Self { vmin, vmax, px0, px1 }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.px0 + ((v - self.vmin) / span) as f32 * (self.px1 - self.px0)
    }
}
