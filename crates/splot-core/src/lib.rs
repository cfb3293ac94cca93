// File: crates/splot-core/src/lib.rs
// Summary: Core library entry point; exports the meshing, figure and rendering API.

pub mod axis;
pub mod chart;
pub mod color;
pub mod display;
pub mod error;
pub mod export;
pub mod figure;
pub mod function;
pub mod geometry;
pub mod grid;
pub mod mesh;
pub mod params;
pub mod plot;
pub mod series;
pub mod surface;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;

pub use axis::YAxis;
pub use chart::{Render, RenderOptions};
pub use display::{DisplayMode, PlotOutput};
pub use error::{Result, SplotError};
pub use figure::{Figure, Layout, LineTrace, SurfaceFigure, SurfaceTrace};
pub use function::{FnGroup, Function2D, Function3D, PlotInput};
pub use mesh::{mesh_2d, mesh_3d};
pub use params::{ParamValue, Params};
pub use plot::{splot, splot3d, splot3d_to, splot_to, PlotOptions};
pub use series::{SampleSet, SurfaceMesh};
pub use theme::Theme;
pub use view::ViewState;
