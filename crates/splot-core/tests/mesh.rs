// File: crates/splot-core/tests/mesh.rs
// Purpose: Mesh builder output shapes, sampling grid and parameter handling.

use splot_core::{mesh_2d, mesh_3d, Function2D, Function3D, Params, SplotError, YAxis};

fn square() -> Function2D {
    Function2D::simple("square", |x| x * x)
}

#[test]
fn mesh_2d_produces_exactly_bins_points() {
    for bins in [1usize, 2, 7, 300, 1001] {
        let set = mesh_2d(&square(), 1.0, 10.0, bins, &Params::new()).expect("mesh");
        assert_eq!(set.x.len(), bins);
        assert_eq!(set.y.len(), bins);
    }
}

#[test]
fn mesh_2d_is_half_open_and_evenly_spaced() {
    let set = mesh_2d(&square(), 0.0, 2.0, 4, &Params::new()).unwrap();
    assert_eq!(set.x, vec![0.0, 0.5, 1.0, 1.5]);
    assert_eq!(set.y, vec![0.0, 0.25, 1.0, 2.25]);
    assert_eq!(set.name, "square");
    assert_eq!(set.param_suffix, "");
    assert_eq!(set.axis, YAxis::Primary);
}

#[test]
fn mesh_2d_forwards_params() {
    let scale = Function2D::new("scale", |x, p| x * p.number_or("k", 1.0).unwrap_or(1.0));
    let params = Params::new().with("k", 3.0);
    let set = mesh_2d(&scale, 2.0, 3.0, 1, &params).unwrap();
    assert_eq!(set.y, vec![6.0]);
    assert_eq!(set.param_suffix, ", k=3");
}

#[test]
fn mesh_2d_keeps_non_finite_outputs() {
    let ln = Function2D::simple("ln", f64::ln);
    let set = mesh_2d(&ln, -1.0, 1.0, 4, &Params::new()).unwrap();
    assert!(set.y[0].is_nan());
    assert!(set.y[2].is_infinite());
    assert!(set.y[3].is_finite());
}

#[test]
fn mesh_2d_rejects_invalid_ranges() {
    let err = mesh_2d(&square(), 5.0, 1.0, 10, &Params::new()).unwrap_err();
    assert!(matches!(err, SplotError::InvalidRange { .. }));
    let err = mesh_2d(&square(), 1.0, 5.0, 0, &Params::new()).unwrap_err();
    assert!(matches!(err, SplotError::ZeroBins));
    let err = mesh_2d(&square(), 1.0, f64::INFINITY, 10, &Params::new()).unwrap_err();
    assert!(matches!(err, SplotError::InvalidRange { .. }));
}

#[test]
fn mesh_3d_is_bins_by_bins() {
    let f = Function3D::simple("sum", |x, y| x + y);
    for bins in [1usize, 3, 20] {
        let m = mesh_3d(&f, 1.0, 10.0, 1.0, 10.0, bins, &Params::new()).unwrap();
        assert_eq!(m.dims(), (bins, bins));
        assert!(m.z.iter().all(|row| row.len() == bins));
    }
}

#[test]
fn mesh_3d_rows_follow_y_columns_follow_x() {
    let f = Function3D::simple("diff", |x, y| x - 10.0 * y);
    let m = mesh_3d(&f, 0.0, 2.0, 0.0, 2.0, 2, &Params::new()).unwrap();
    // x = [0, 1], y = [0, 1]
    assert_eq!(m.z, vec![vec![0.0, 1.0], vec![-10.0, -9.0]]);
}

#[test]
fn mesh_3d_validates_both_ranges() {
    let f = Function3D::simple("sum", |x, y| x + y);
    assert!(mesh_3d(&f, 0.0, 1.0, 2.0, 2.0, 5, &Params::new()).is_err());
    assert!(mesh_3d(&f, 1.0, 0.0, 0.0, 1.0, 5, &Params::new()).is_err());
}

#[test]
fn mesh_3d_keeps_non_finite_grid() {
    let f = Function3D::simple("hole", |_, _| f64::NAN);
    let m = mesh_3d(&f, 0.0, 1.0, 0.0, 1.0, 3, &Params::new()).unwrap();
    assert_eq!(m.dims(), (3, 3));
    assert_eq!(m.z_extent(), None);

    let partial = Function3D::simple("sqrt", |x, y| (x - y).sqrt());
    let m = mesh_3d(&partial, 0.0, 2.0, 0.0, 2.0, 2, &Params::new()).unwrap();
    assert_eq!(m.z_extent(), Some((0.0, 1.0)));
}
