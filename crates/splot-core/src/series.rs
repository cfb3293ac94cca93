// File: crates/splot-core/src/series.rs
// Summary: Sampled data models: 1D sample sets (lines) and 2D height-maps (surfaces).

use crate::axis::YAxis;

/// Inputs paired with function outputs, ready to become a line trace.
#[derive(Clone, Debug, PartialEq)]
pub struct SampleSet {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Function display name.
    pub name: String,
    /// `", k=v"` encoding of the params used, for disambiguating labels.
    pub param_suffix: String,
    pub axis: YAxis,
}

impl SampleSet {
    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    pub fn with_axis(mut self, axis: YAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Min/max over finite outputs, `None` when there are none.
    pub fn y_extent(&self) -> Option<(f64, f64)> {
        extent(self.y.iter().copied())
    }
}

/// Function evaluated over a grid: `z[row][col] = f(x[col], y[row])`.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceMesh {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    pub name: String,
    pub param_suffix: String,
}

impl SurfaceMesh {
    /// (rows, cols) of the height-map.
    pub fn dims(&self) -> (usize, usize) {
        (self.z.len(), self.z.first().map_or(0, Vec::len))
    }

    pub fn z_extent(&self) -> Option<(f64, f64)> {
        extent(self.z.iter().flatten().copied())
    }
}

/// Min/max of the finite values in `values`.
pub fn extent(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_skips_non_finite() {
        let vals = [f64::NAN, 3.0, f64::INFINITY, -1.0];
        assert_eq!(extent(vals.into_iter()), Some((-1.0, 3.0)));
        assert_eq!(extent([f64::NAN].into_iter()), None);
    }
}
