// File: crates/splot-core/src/plot.rs
// Summary: Public entry points: mesh one or more functions, assemble a figure, render and show it.

use std::io::Write;

use tracing::debug;

use crate::axis::YAxis;
use crate::chart::{Render, RenderOptions};
use crate::display::{show, DisplayMode, PlotOutput};
use crate::error::{Result, SplotError};
use crate::figure::{Figure, SurfaceFigure};
use crate::function::{Function2D, Function3D, PlotInput};
use crate::mesh::{mesh_2d, mesh_3d};
use crate::params::{ParamValue, Params};
use crate::series::{SampleSet, SurfaceMesh};

/// Title used when more than one function is plotted.
pub const COMPARISON_TITLE: &str = "Comparison: ";
/// Param key that selects the y-axis of a 2D trace.
pub const YAXIS_PARAM: &str = "yaxis";

/// Sampling ranges, display mode and render settings for one plot call.
#[derive(Clone, Debug)]
pub struct PlotOptions {
    pub x_min: f64,
    pub x_max: f64,
    /// Second input range; used by 3D plots only.
    pub y_min: f64,
    pub y_max: f64,
    pub bins: usize,
    /// Call-level params applied to every function; a group's own params win on conflict.
    pub params: Params,
    pub mode: DisplayMode,
    pub render: RenderOptions,
}

impl Default for PlotOptions {
    fn default() -> Self {
        Self {
            x_min: 1.0,
            x_max: 10.0,
            y_min: 1.0,
            y_max: 10.0,
            bins: 300,
            params: Params::new(),
            mode: DisplayMode::Inline,
            render: RenderOptions::default(),
        }
    }
}

impl PlotOptions {
    /// Defaults for surface plots: a coarser 20 x 20 grid.
    pub fn surface_default() -> Self {
        Self { bins: 20, ..Self::default() }
    }

    pub fn with_mode(mut self, mode: DisplayMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }
}

fn title_for<F>(input: &PlotInput<F>, name: impl Fn(&F) -> &str) -> String {
    match input {
        PlotInput::Single(f) => name(f).to_string(),
        PlotInput::Many(_) => COMPARISON_TITLE.to_string(),
    }
}

fn parse_axis(value: Option<ParamValue>) -> Result<YAxis> {
    match value {
        None => Ok(YAxis::Primary),
        Some(v) => match v.as_text() {
            Some(s) => s.parse(),
            None => Err(SplotError::InvalidAxis(v.to_string())),
        },
    }
}

/// Mesh every function of `input`. Returns the sample sets and the figure title.
///
/// Call-level params are merged under each group's own. A `yaxis` param is removed
/// before meshing and selects the trace's axis.
pub fn sample_2d(input: impl Into<PlotInput<Function2D>>, opts: &PlotOptions) -> Result<(Vec<SampleSet>, String)> {
    let input = input.into();
    let title = title_for(&input, |f| f.name());
    let groups = input.into_groups();
    if groups.is_empty() {
        return Err(SplotError::EmptyInput);
    }

    let mut sets = Vec::with_capacity(groups.len());
    for group in groups {
        let mut params = opts.params.merged(&group.params);
        let axis = parse_axis(params.take(YAXIS_PARAM))?;
        let set = mesh_2d(&group.func, opts.x_min, opts.x_max, opts.bins, &params)?;
        sets.push(set.with_axis(axis));
    }
    Ok((sets, title))
}

/// Mesh and assemble a 2D figure without rendering it.
pub fn build_figure(input: impl Into<PlotInput<Function2D>>, opts: &PlotOptions) -> Result<Figure> {
    let (sets, title) = sample_2d(input, opts)?;
    Ok(Figure::from_sample_sets(sets, title))
}

/// Render an assembled figure with `opts.render` and deliver it per `opts.mode`.
pub fn render_and_show<R: Render, W: Write>(fig: &R, opts: &PlotOptions, out: &mut W) -> Result<PlotOutput> {
    let png = fig.render_to_png_bytes(&opts.render)?;
    debug!(mode = ?opts.mode, bytes = png.len(), "rendered figure");
    show(png, &opts.mode, out)
}

/// Plot one or more functions of one variable; inline output goes to stdout.
pub fn splot(input: impl Into<PlotInput<Function2D>>, opts: &PlotOptions) -> Result<PlotOutput> {
    let stdout = std::io::stdout();
    splot_to(input, opts, &mut stdout.lock())
}

/// As [`splot`], writing inline output to `out`.
pub fn splot_to<W: Write>(input: impl Into<PlotInput<Function2D>>, opts: &PlotOptions, out: &mut W) -> Result<PlotOutput> {
    let fig = build_figure(input, opts)?;
    debug!(title = %fig.layout.title, traces = fig.traces.len(), "showing 2D plot");
    render_and_show(&fig, opts, out)
}

/// Mesh every function of `input` over the `x` x `y` grid with the call-level params
/// merged under each group's own.
pub fn sample_3d(input: impl Into<PlotInput<Function3D>>, opts: &PlotOptions) -> Result<(Vec<SurfaceMesh>, String)> {
    let input = input.into();
    let title = title_for(&input, |f| f.name());
    let groups = input.into_groups();
    if groups.is_empty() {
        return Err(SplotError::EmptyInput);
    }

    let meshes = groups
        .iter()
        .map(|g| {
            let params = opts.params.merged(&g.params);
            mesh_3d(&g.func, opts.x_min, opts.x_max, opts.y_min, opts.y_max, opts.bins, &params)
        })
        .collect::<Result<Vec<_>>>()?;
    Ok((meshes, title))
}

pub fn build_surface_figure(input: impl Into<PlotInput<Function3D>>, opts: &PlotOptions) -> Result<SurfaceFigure> {
    let (meshes, title) = sample_3d(input, opts)?;
    Ok(SurfaceFigure::from_meshes(meshes, title))
}

/// Plot one or more functions of two variables as surfaces; inline output goes to stdout.
pub fn splot3d(input: impl Into<PlotInput<Function3D>>, opts: &PlotOptions) -> Result<PlotOutput> {
    let stdout = std::io::stdout();
    splot3d_to(input, opts, &mut stdout.lock())
}

pub fn splot3d_to<W: Write>(input: impl Into<PlotInput<Function3D>>, opts: &PlotOptions, out: &mut W) -> Result<PlotOutput> {
    let fig = build_surface_figure(input, opts)?;
    debug!(title = %fig.title, surfaces = fig.surfaces.len(), "showing 3D plot");
    render_and_show(&fig, opts, out)
}
