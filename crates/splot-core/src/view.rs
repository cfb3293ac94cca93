// File: crates/splot-core/src/view.rs
// Visible ranges for a 2D figure: shared x range, one y range per axis.

use crate::axis::YAxis;
use crate::figure::Figure;
use crate::series::extent;

/// Inclusive value range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const UNIT: Range = Range { min: 0.0, max: 1.0 };

    /// Widen a degenerate span to 1 and pad by `margin` of the span on both ends.
    ///
    /// Degenerate means no wider than float rounding at the operands' magnitude, so tiny but
    /// real spans (e.g. outputs around 1e-10) keep their own scale.
    fn padded(min: f64, max: f64, margin: f64) -> Self {
        let span = max - min;
        let flat = span <= f64::EPSILON * min.abs().max(max.abs()).max(1.0);
        let (min, max) = if flat { (min - 0.5, max + 0.5) } else { (min, max) };
        let m = (max - min) * margin;
        Self { min: min - m, max: max + m }
    }

    pub fn span(&self) -> f64 { self.max - self.min }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewState {
    pub x: Range,
    pub y: Range,
    pub y2: Range,
}

impl ViewState {
    /// Autoscale over finite samples. X is tight; y ranges get a 2% margin.
    pub fn from_figure(fig: &Figure) -> Self {
        let xs = extent(fig.traces.iter().flat_map(|t| t.x.iter().copied()));
        let x = match xs {
            Some((lo, hi)) => Range::padded(lo, hi, 0.0),
            None => Range::UNIT,
        };
        Self { x, y: y_range(fig, YAxis::Primary), y2: y_range(fig, YAxis::Secondary) }
    }

    pub fn y_for(&self, axis: YAxis) -> Range {
        match axis {
            YAxis::Primary => self.y,
            YAxis::Secondary => self.y2,
        }
    }
}

fn y_range(fig: &Figure, axis: YAxis) -> Range {
    let ys = extent(
        fig.traces
            .iter()
            .filter(|t| t.axis == axis)
            .flat_map(|t| t.y.iter().copied()),
    );
    match ys {
        Some((lo, hi)) => Range::padded(lo, hi, 0.02),
        None => Range::UNIT,
    }
}
