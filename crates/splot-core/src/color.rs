// File: crates/splot-core/src/color.rs
// Summary: Hue spreading for traces and the height colormap for surfaces.

use skia_safe as skia;

use crate::axis::Rgb;

/// Saturation used for line traces.
pub const TRACE_SATURATION: f64 = 1.0;
/// Value (brightness) used for line traces.
pub const TRACE_VALUE: f64 = 0.85;

/// Convert HSV (hue in degrees, s/v in 0..=1) to RGB. Hue wraps modulo 360.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let h = h.rem_euclid(360.0);
    let s = s.clamp(0.0, 1.0);
    let v = v.clamp(0.0, 1.0);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = if h < 60.0 {
        (c, x, 0.0)
    } else if h < 120.0 {
        (x, c, 0.0)
    } else if h < 180.0 {
        (0.0, c, x)
    } else if h < 240.0 {
        (0.0, x, c)
    } else if h < 300.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    Rgb(
        ((r + m) * 255.0).round() as u8,
        ((g + m) * 255.0).round() as u8,
        ((b + m) * 255.0).round() as u8,
    )
}

/// Hue for the `index`-th (1-based) of `count` traces: steps of `255 / max(count - 1, 1)`
/// degrees, truncated to a whole degree and wrapped into `[0, 360)`.
pub fn trace_hue(index: usize, count: usize) -> f64 {
    let step = 255.0 / (count.saturating_sub(1).max(1) as f64);
    (index as f64 * step).trunc().rem_euclid(360.0)
}

pub fn trace_color(index: usize, count: usize) -> Rgb {
    hsv_to_rgb(trace_hue(index, count), TRACE_SATURATION, TRACE_VALUE)
}

/// Height colormap: blue (t = 0) through green to red (t = 1).
pub fn height_color(t: f64) -> Rgb {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    hsv_to_rgb((1.0 - t) * 240.0, 0.85, 0.95)
}

impl From<Rgb> for skia::Color {
    fn from(c: Rgb) -> Self {
        skia::Color::from_argb(255, c.0, c.1, c.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_hues() {
        assert_eq!(hsv_to_rgb(0.0, 1.0, 1.0), Rgb(255, 0, 0));
        assert_eq!(hsv_to_rgb(120.0, 1.0, 1.0), Rgb(0, 255, 0));
        assert_eq!(hsv_to_rgb(240.0, 1.0, 1.0), Rgb(0, 0, 255));
        assert_eq!(hsv_to_rgb(360.0, 1.0, 1.0), Rgb(255, 0, 0));
    }

    #[test]
    fn hue_steps_follow_trace_count() {
        // Single trace: step falls back to 255.
        assert_eq!(trace_hue(1, 1), 255.0);
        // Three traces: 127.5 degree steps, truncated to whole degrees.
        assert_eq!(trace_hue(1, 3), 127.0);
        assert_eq!(trace_hue(2, 3), 255.0);
        assert_eq!(trace_hue(3, 3), 22.0);
        // Four traces: 85 degree steps.
        assert_eq!(trace_hue(2, 4), 170.0);
    }

    #[test]
    fn distinct_colors_for_small_sets() {
        let colors: Vec<Rgb> = (1..=4).map(|i| trace_color(i, 4)).collect();
        for i in 0..colors.len() {
            for j in (i + 1)..colors.len() {
                assert_ne!(colors[i], colors[j]);
            }
        }
    }

    #[test]
    fn height_color_endpoints() {
        let lo = height_color(0.0);
        let hi = height_color(1.0);
        assert!(lo.2 > lo.0, "low end is blue");
        assert!(hi.0 > hi.2, "high end is red");
        assert_eq!(height_color(f64::NAN), lo);
    }
}
