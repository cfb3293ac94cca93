// File: crates/splot-core/src/mesh.rs
// Summary: Mesh builder; evaluates functions over a 1D range or a 2D grid.

use tracing::{debug, warn};

use crate::axis::YAxis;
use crate::error::Result;
use crate::function::{Function2D, Function3D};
use crate::grid::bin_starts;
use crate::params::Params;
use crate::series::{SampleSet, SurfaceMesh};

/// Sample `f` at `bins` evenly spaced points over `[x_min, x_max)`.
///
/// The returned set is bound to the primary axis; callers reassign it.
pub fn mesh_2d(f: &Function2D, x_min: f64, x_max: f64, bins: usize, params: &Params) -> Result<SampleSet> {
    let x = bin_starts(x_min, x_max, bins)?;
    let y: Vec<f64> = x.iter().map(|&xi| f.eval(xi, params)).collect();

    let set = SampleSet {
        x,
        y,
        name: f.name().to_string(),
        param_suffix: params.suffix(),
        axis: YAxis::Primary,
    };
    if set.y_extent().is_none() {
        warn!(function = f.name(), "no finite samples in range");
    }
    debug!(function = f.name(), bins, x_min, x_max, "meshed 2D function");
    Ok(set)
}

/// Evaluate `f` over the Cartesian product of two `bins`-point ranges.
pub fn mesh_3d(
    f: &Function3D,
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
    bins: usize,
    params: &Params,
) -> Result<SurfaceMesh> {
    let x = bin_starts(x_min, x_max, bins)?;
    let y = bin_starts(y_min, y_max, bins)?;
    let z: Vec<Vec<f64>> = y
        .iter()
        .map(|&yj| x.iter().map(|&xi| f.eval(xi, yj, params)).collect())
        .collect();
    let mesh = SurfaceMesh {
        x,
        y,
        z,
        name: f.name().to_string(),
        param_suffix: params.suffix(),
    };
    if mesh.z_extent().is_none() {
        warn!(function = f.name(), "no finite samples on grid");
    }
    debug!(function = f.name(), bins, "meshed 3D function");
    Ok(mesh)
}
