// File: crates/splot-core/tests/figure.rs
// Purpose: Figure assembly: labels, colors, axis selection and titles.

use splot_core::color::trace_color;
use splot_core::plot::{build_figure, build_surface_figure, sample_2d, sample_3d, COMPARISON_TITLE};
use splot_core::{FnGroup, Function2D, Function3D, Params, PlotInput, PlotOptions, SplotError, YAxis};

fn gaussian() -> Function2D {
    Function2D::new("gaussian", |x, p| {
        let mu = p.number_or("mu", 0.0).unwrap_or(0.0);
        let sigma = p.number_or("sigma", 1.0).unwrap_or(1.0);
        (-(x - mu).powi(2) / (2.0 * sigma * sigma)).exp()
    })
}

fn opts() -> PlotOptions {
    PlotOptions { bins: 50, ..PlotOptions::default() }
}

#[test]
fn single_function_titles_with_its_name() {
    let fig = build_figure(Function2D::simple("sin", f64::sin), &opts()).unwrap();
    assert_eq!(fig.layout.title, "sin");
    assert_eq!(fig.traces.len(), 1);
    assert_eq!(fig.traces[0].name, "sin");
    assert_eq!(fig.traces[0].x.len(), 50);
}

#[test]
fn duplicate_names_get_param_suffix() {
    let input = vec![
        (gaussian(), Params::new().with("mu", 2.0)),
        (gaussian(), Params::new().with("mu", 5.0).with("sigma", 0.5)),
        (Function2D::simple("cos", f64::cos), Params::new().with("unused", 1.0)),
    ];
    let fig = build_figure(input, &opts()).unwrap();
    assert_eq!(fig.layout.title, COMPARISON_TITLE);
    let names: Vec<&str> = fig.traces.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["gaussian, mu=2", "gaussian, mu=5, sigma=0.5", "cos"]);
}

#[test]
fn list_of_one_is_still_a_comparison() {
    let fig = build_figure(vec![gaussian()], &opts()).unwrap();
    assert_eq!(fig.layout.title, COMPARISON_TITLE);
    assert_eq!(fig.traces[0].name, "gaussian");
}

#[test]
fn colors_spread_by_index() {
    let input = vec![
        Function2D::simple("a", |x| x),
        Function2D::simple("b", |x| 2.0 * x),
        Function2D::simple("c", |x| 3.0 * x),
    ];
    let fig = build_figure(input, &opts()).unwrap();
    for (i, t) in fig.traces.iter().enumerate() {
        assert_eq!(t.color, trace_color(i + 1, 3));
    }
}

#[test]
fn yaxis_param_selects_axis_and_is_not_forwarded() {
    let input = PlotInput::many(vec![
        FnGroup::new(gaussian(), Params::new().with("yaxis", "right").with("mu", 1.0)),
        FnGroup::new(gaussian(), Params::new().with("yaxis", "y")),
        FnGroup::new(gaussian(), Params::new().with("yaxis", "y2")),
        FnGroup::new(gaussian(), Params::new().with("yaxis", "left")),
        FnGroup::from(gaussian()),
    ]);
    let (sets, _) = sample_2d(input, &opts()).unwrap();
    let axes: Vec<YAxis> = sets.iter().map(|s| s.axis).collect();
    assert_eq!(
        axes,
        vec![YAxis::Secondary, YAxis::Primary, YAxis::Secondary, YAxis::Primary, YAxis::Primary]
    );
    assert_eq!(sets[0].param_suffix, ", mu=1");
    assert_eq!(sets[1].param_suffix, "");
}

#[test]
fn invalid_yaxis_is_an_error() {
    let input = vec![(gaussian(), Params::new().with("yaxis", "top"))];
    let err = build_figure(input, &opts()).unwrap_err();
    assert!(matches!(err, SplotError::InvalidAxis(ref s) if s == "top"));

    let input = vec![(gaussian(), Params::new().with("yaxis", 2.0))];
    assert!(matches!(build_figure(input, &opts()), Err(SplotError::InvalidAxis(_))));
}

#[test]
fn layout_has_secondary_axis_overlaying_primary() {
    let fig = build_figure(gaussian(), &opts()).unwrap();
    assert_eq!(fig.layout.y_axis2.overlaying, Some(YAxis::Primary));
    assert_eq!(fig.layout.y_axis.grid_color, splot_core::axis::Rgb::WHITE);
    assert_eq!(fig.layout.x_axis.zero_line_color, splot_core::axis::Rgb::WHITE);
}

#[test]
fn empty_list_is_rejected() {
    let input: Vec<Function2D> = Vec::new();
    assert!(matches!(build_figure(input, &opts()), Err(SplotError::EmptyInput)));
}

#[test]
fn surface_figure_collects_one_surface_per_function() {
    let input = vec![
        Function3D::simple("saddle", |x, y| x * x - y * y),
        Function3D::simple("bowl", |x, y| x * x + y * y),
    ];
    let fig = build_surface_figure(input, &PlotOptions::surface_default()).unwrap();
    assert_eq!(fig.title, COMPARISON_TITLE);
    assert_eq!(fig.surfaces.len(), 2);
    assert_eq!(fig.surfaces[0].z.len(), 20);
    assert_eq!(fig.surfaces[1].z[0].len(), 20);
}

#[test]
fn call_level_params_reach_a_single_surface() {
    let ripple = Function3D::new("ripple", |x, y, p| {
        let freq = p.number_or("freq", 1.0).unwrap_or(1.0);
        (freq * x).sin() * (freq * y).cos()
    });
    let opts = PlotOptions { bins: 4, ..PlotOptions::surface_default() }.with_params(Params::new().with("freq", 0.0));
    let fig = build_surface_figure(ripple.clone(), &opts).unwrap();
    // A single function keeps its own title, and freq = 0 flattens the surface.
    assert_eq!(fig.title, "ripple");
    assert!(fig.surfaces[0].z.iter().flatten().all(|&z| z == 0.0));

    // A group's own value wins over the call-level one.
    let input = vec![FnGroup::new(ripple, Params::new().with("freq", 1.0))];
    let (meshes, _) = sample_3d(input, &opts).unwrap();
    assert_eq!(meshes[0].param_suffix, ", freq=1");
    assert!(meshes[0].z.iter().flatten().any(|&z| z != 0.0));
}

#[test]
fn call_level_params_merge_under_2d_groups() {
    let opts = opts().with_params(Params::new().with("sigma", 0.5).with("yaxis", "right"));
    let input = vec![
        (gaussian(), Params::new().with("mu", 2.0)),
        (gaussian(), Params::new().with("yaxis", "left")),
    ];
    let (sets, _) = sample_2d(input, &opts).unwrap();
    assert_eq!(sets[0].param_suffix, ", sigma=0.5, mu=2");
    assert_eq!(sets[0].axis, YAxis::Secondary);
    assert_eq!(sets[1].param_suffix, ", sigma=0.5");
    assert_eq!(sets[1].axis, YAxis::Primary);
}
