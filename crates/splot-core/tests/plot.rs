// File: crates/splot-core/tests/plot.rs
// Purpose: Entry points deliver output per display mode; CSV export of sampled data.

use splot_core::display::DisplayMode;
use splot_core::export::{write_csv, write_surface_csv};
use splot_core::plot::sample_2d;
use splot_core::{mesh_3d, splot3d_to, splot_to, Function2D, Function3D, Params, PlotOptions, PlotOutput};

fn quick_opts() -> PlotOptions {
    let mut opts = PlotOptions { bins: 40, ..PlotOptions::default() };
    opts.render.width = 240;
    opts.render.height = 160;
    opts.render.draw_labels = false;
    opts
}

#[test]
fn inline_mode_writes_display_block() {
    let mut out = Vec::new();
    let res = splot_to(Function2D::simple("cos", f64::cos), &quick_opts(), &mut out).expect("plot");
    let PlotOutput::Inline { bytes } = res else { panic!("expected inline output") };
    assert!(bytes.starts_with(&[137, 80, 78, 71]));

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "EVCXR_BEGIN_CONTENT image/png");
    assert!(lines[1].starts_with("iVBOR"), "base64 PNG payload");
    assert_eq!(lines[2], "EVCXR_END_CONTENT");
}

#[test]
fn standalone_mode_writes_file_and_nothing_inline() {
    let path = std::path::PathBuf::from("target/test_out/standalone/cos.png");
    let _ = std::fs::remove_file(&path);
    let opts = quick_opts().with_mode(DisplayMode::standalone(&path));

    let mut out = Vec::new();
    let res = splot_to(Function2D::simple("cos", f64::cos), &opts, &mut out).expect("plot");
    assert_eq!(res, PlotOutput::File { path: path.clone() });
    assert!(out.is_empty());
    let bytes = std::fs::read(&path).expect("file written");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}

#[test]
fn surface_plot_inline() {
    let mut out = Vec::new();
    let mut opts = quick_opts();
    opts.bins = 8;
    let f = Function3D::simple("bowl", |x, y| x * x + y * y);
    let res = splot3d_to(f, &opts, &mut out).expect("plot3d");
    assert!(matches!(res, PlotOutput::Inline { .. }));
    assert!(!out.is_empty());
}

#[test]
fn invalid_range_fails_before_rendering() {
    let mut out = Vec::new();
    let opts = PlotOptions { x_min: 3.0, x_max: 3.0, ..quick_opts() };
    assert!(splot_to(Function2D::simple("cos", f64::cos), &opts, &mut out).is_err());
    assert!(out.is_empty());
}

#[test]
fn csv_export_long_format() {
    let opts = PlotOptions { x_min: 0.0, x_max: 2.0, bins: 2, ..PlotOptions::default() };
    let input = vec![
        (Function2D::simple("id", |x| x), Params::new()),
        (Function2D::simple("neg", |x| -x), Params::new().with("yaxis", "right")),
    ];
    let (sets, _) = sample_2d(input, &opts).unwrap();
    let mut buf = Vec::new();
    write_csv(&sets, &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, "trace,axis,x,y\nid,y,0,0\nid,y,1,1\nneg,y2,0,-0\nneg,y2,1,-1\n");
}

#[test]
fn surface_csv_export() {
    let f = Function3D::simple("sum", |x, y| x + y);
    let m = mesh_3d(&f, 0.0, 2.0, 0.0, 2.0, 2, &Params::new()).unwrap();
    let mut buf = Vec::new();
    write_surface_csv(&[m], &mut buf).unwrap();
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text, "surface,x,y,z\nsum,0,0,0\nsum,1,0,1\nsum,0,1,1\nsum,1,1,2\n");
}
