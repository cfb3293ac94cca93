// File: crates/splot-cli/src/main.rs
// Summary: `splot` binary; plots catalog functions inline (stdout) or to a PNG file.

mod catalog;
mod spec;

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use splot_core::display::DisplayMode;
use splot_core::export::{write_csv, write_surface_csv};
use splot_core::plot::{render_and_show, sample_2d, sample_3d};
use splot_core::types::{HEIGHT, WIDTH};
use splot_core::{theme, Figure, FnGroup, PlotInput, PlotOptions, PlotOutput, SurfaceFigure};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::catalog::{Entry, FUNCTIONS_2D, FUNCTIONS_3D};

#[derive(Parser, Debug)]
#[command(name = "splot")]
#[command(about = "Plot mathematical functions to PNG or inline notebook output", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Plot functions of one variable, e.g. `gaussian:mu=3,yaxis=right`
    Plot {
        #[arg(required = true)]
        specs: Vec<String>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// Plot functions of two variables as surfaces
    Plot3d {
        #[arg(required = true)]
        specs: Vec<String>,
        #[command(flatten)]
        common: CommonArgs,
    },
    /// List the built-in functions and their parameters
    List,
}

#[derive(Args, Debug)]
struct CommonArgs {
    #[arg(long, allow_negative_numbers = true)]
    x_min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    x_max: Option<f64>,
    /// Second input range (plot3d only)
    #[arg(long, allow_negative_numbers = true)]
    y_min: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    y_max: Option<f64>,
    /// Samples per axis (default 300 for plot, 20 for plot3d)
    #[arg(long)]
    bins: Option<usize>,
    /// Write a standalone PNG here instead of inline output on stdout
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Also write the sampled data as CSV
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Color theme: plotly, dark or light
    #[arg(long, default_value = "plotly")]
    theme: String,
    #[arg(long, default_value_t = WIDTH)]
    width: i32,
    #[arg(long, default_value_t = HEIGHT)]
    height: i32,
    /// Skip title, tick labels and legend text
    #[arg(long)]
    no_labels: bool,
}

impl CommonArgs {
    fn options(&self, base: PlotOptions) -> PlotOptions {
        let mut opts = base;
        if let Some(v) = self.x_min { opts.x_min = v; }
        if let Some(v) = self.x_max { opts.x_max = v; }
        if let Some(v) = self.y_min { opts.y_min = v; }
        if let Some(v) = self.y_max { opts.y_max = v; }
        if let Some(v) = self.bins { opts.bins = v; }
        opts.mode = match &self.out {
            Some(path) => DisplayMode::standalone(path),
            None => DisplayMode::Inline,
        };
        opts.render.theme = theme::find(&self.theme);
        opts.render.width = self.width;
        opts.render.height = self.height;
        opts.render.draw_labels = !self.no_labels;
        opts
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    // stderr keeps stdout clean for inline display blocks
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

/// Resolve specs against a catalog table. One bare function stays a single plot.
fn resolve<F>(table: &[Entry<F>], specs: &[String], allow_axis: bool) -> Result<PlotInput<F>> {
    let mut groups = Vec::with_capacity(specs.len());
    for raw in specs {
        let spec = spec::parse(raw)?;
        let entry = catalog::find(table, &spec.name)
            .ok_or_else(|| anyhow!("unknown function '{}'; run `splot list`", spec.name))?;
        entry.check_params(&spec.params, allow_axis)?;
        groups.push(FnGroup::new(entry.build(), spec.params));
    }
    if groups.len() == 1 && groups[0].params.is_empty() {
        if let Some(g) = groups.pop() {
            return Ok(PlotInput::Single(g.func));
        }
    }
    Ok(PlotInput::Many(groups))
}

fn create(path: &Path) -> Result<BufWriter<File>> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    Ok(BufWriter::new(file))
}

fn report(output: &PlotOutput) {
    if let PlotOutput::File { path } = output {
        println!("Wrote {}", path.display());
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::List => print!("{}", catalog::listing()),
        Command::Plot { specs, common } => {
            let opts = common.options(PlotOptions::default());
            let input = resolve(FUNCTIONS_2D, &specs, true)?;
            let (sets, title) = sample_2d(input, &opts).context("plot failed")?;
            if let Some(path) = &common.csv {
                write_csv(&sets, create(path)?)?;
                info!(path = %path.display(), "wrote CSV");
            }
            let fig = Figure::from_sample_sets(sets, title);
            let output = render_and_show(&fig, &opts, &mut std::io::stdout().lock()).context("plot failed")?;
            report(&output);
        }
        Command::Plot3d { specs, common } => {
            let opts = common.options(PlotOptions::surface_default());
            let input = resolve(FUNCTIONS_3D, &specs, false)?;
            let (meshes, title) = sample_3d(input, &opts).context("plot3d failed")?;
            if let Some(path) = &common.csv {
                write_surface_csv(&meshes, create(path)?)?;
                info!(path = %path.display(), "wrote CSV");
            }
            let fig = SurfaceFigure::from_meshes(meshes, title);
            let output = render_and_show(&fig, &opts, &mut std::io::stdout().lock()).context("plot3d failed")?;
            report(&output);
        }
    }
    Ok(())
}
