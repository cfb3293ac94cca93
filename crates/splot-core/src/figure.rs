// File: crates/splot-core/src/figure.rs
// Summary: Figure assembler; turns sample sets into labelled, colored traces with a dual y-axis layout.

use tracing::debug;

use crate::axis::{AxisStyle, Rgb, YAxis};
use crate::color::trace_color;
use crate::series::{SampleSet, SurfaceMesh};

/// One plotted line.
#[derive(Clone, Debug, PartialEq)]
pub struct LineTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    /// Legend label.
    pub name: String,
    pub color: Rgb,
    pub axis: YAxis,
}

impl LineTrace {
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }
}

/// Title plus one x-axis and two y-axes (left primary, right secondary overlaying it).
#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub title: String,
    pub x_axis: AxisStyle,
    pub y_axis: AxisStyle,
    pub y_axis2: AxisStyle,
}

impl Layout {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_axis: AxisStyle::x(),
            y_axis: AxisStyle::y(),
            y_axis2: AxisStyle::y2(),
        }
    }

    pub fn y_style(&self, axis: YAxis) -> &AxisStyle {
        match axis {
            YAxis::Primary => &self.y_axis,
            YAxis::Secondary => &self.y_axis2,
        }
    }
}

/// A 2D line figure.
#[derive(Clone, Debug, PartialEq)]
pub struct Figure {
    pub traces: Vec<LineTrace>,
    pub layout: Layout,
}

impl Figure {
    /// Assemble traces from `sets`.
    ///
    /// The i-th set gets color `trace_color(i, n)`. A set whose name is shared with another
    /// set gets its param suffix appended to the label.
    pub fn from_sample_sets(sets: Vec<SampleSet>, title: impl Into<String>) -> Self {
        let n = sets.len();
        let labels: Vec<String> = sets
            .iter()
            .map(|s| {
                let shared = sets.iter().filter(|o| o.name == s.name).count() > 1;
                if shared { format!("{}{}", s.name, s.param_suffix) } else { s.name.clone() }
            })
            .collect();

        let traces = sets
            .into_iter()
            .zip(labels)
            .enumerate()
            .map(|(i, (s, name))| LineTrace {
                x: s.x,
                y: s.y,
                name,
                color: trace_color(i + 1, n),
                axis: s.axis,
            })
            .collect::<Vec<_>>();

        let layout = Layout::new(title);
        debug!(title = %layout.title, traces = traces.len(), "assembled figure");
        Self { traces, layout }
    }

    pub fn uses_axis(&self, axis: YAxis) -> bool {
        self.traces.iter().any(|t| t.axis == axis)
    }
}

/// One surface height-map.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceTrace {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<Vec<f64>>,
    pub name: String,
}

impl From<SurfaceMesh> for SurfaceTrace {
    fn from(m: SurfaceMesh) -> Self {
        Self { x: m.x, y: m.y, z: m.z, name: m.name }
    }
}

/// A 3D figure of surfaces sharing one bounding box.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceFigure {
    pub surfaces: Vec<SurfaceTrace>,
    pub title: String,
}

impl SurfaceFigure {
    pub fn from_meshes(meshes: Vec<SurfaceMesh>, title: impl Into<String>) -> Self {
        Self { surfaces: meshes.into_iter().map(SurfaceTrace::from).collect(), title: title.into() }
    }
}
