use std::f64::consts::{FRAC_PI_2, TAU};

use approx::{assert_abs_diff_eq, assert_relative_eq};
use ovum_geometry::{Curve, Ellipse};
use ovum_math::{dvec3, Point3, Vector3};
use proptest::prelude::*;

fn flat(r: f64, e: f64) -> Ellipse {
    Ellipse::new(r, e, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0)
}

fn assert_points_close(a: Point3, b: Point3, epsilon: f64) {
    assert_abs_diff_eq!(a.x, b.x, epsilon = epsilon);
    assert_abs_diff_eq!(a.y, b.y, epsilon = epsilon);
    assert_abs_diff_eq!(a.z, b.z, epsilon = epsilon);
}

#[test]
fn test_default_cardinal_points() {
    let ellipse = Ellipse::default();
    assert_eq!(ellipse.eval(0.0), dvec3(1.0, 0.0, 0.0));
    assert_points_close(ellipse.eval(FRAC_PI_2), dvec3(0.0, 1.0, 0.0), 1e-12);
}

#[test]
fn test_centre_ragged_setter() {
    let mut ellipse = Ellipse::default();

    ellipse.set_centre_from(&[5.0]);
    assert_eq!(ellipse.centre(), dvec3(5.0, 0.0, 0.0));

    ellipse.set_centre_from(&[5.0, 6.0]);
    assert_eq!(ellipse.centre(), dvec3(5.0, 6.0, 0.0));

    ellipse.set_centre_from(&[5.0, 6.0, 7.0, 8.0]);
    assert_eq!(ellipse.centre(), dvec3(5.0, 6.0, 7.0));

    ellipse.set_centre_from(&[]);
    assert_eq!(ellipse.centre(), Ellipse::DEFAULT_CENTRE);
}

#[test]
fn test_three_scalar_setters_take_any_values() {
    let mut ellipse = Ellipse::default();
    ellipse.set_centre(-1.0, 2.5, 1e9);
    ellipse.set_normal(0.0, 0.0, 0.0);
    ellipse.set_tangent(-3.0, 0.0, 4.0);
    assert_eq!(ellipse.centre(), dvec3(-1.0, 2.5, 1e9));
    assert_eq!(ellipse.normal(), Vector3::ZERO);
    assert_eq!(ellipse.tangent(), dvec3(-3.0, 0.0, 4.0));
}

#[test]
fn test_resets_are_idempotent() {
    let mut once = Ellipse::new(2.0, 1.0, 1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0);
    once.reset_centre();
    once.reset_normal();
    once.reset_tangent();
    once.reset_radius();
    once.reset_eccentricity();
    once.reset_major();
    once.reset_minor();

    let mut twice = once.clone();
    twice.reset_centre();
    twice.reset_normal();
    twice.reset_tangent();
    twice.reset_radius();
    twice.reset_eccentricity();
    twice.reset_major();
    twice.reset_minor();

    assert_eq!(once, twice);
}

#[test]
fn test_negative_inputs_accepted() {
    let ellipse = flat(-1.0, -2.0);
    assert_eq!(ellipse.major(), -3.0);
    assert_eq!(ellipse.minor(), -1.0);
    assert_eq!(ellipse.eval(0.0), dvec3(-3.0, 0.0, 0.0));
}

#[test]
fn test_nan_inputs_propagate() {
    let ellipse = flat(f64::NAN, 1.0);
    let p = ellipse.eval(0.0);
    assert!(p.x.is_nan());
    assert!(p.y.is_nan());
    assert_eq!(p.z, 0.0);
}

#[test]
fn test_periodic_in_parameter() {
    let ellipse = flat(1.5, 0.5);
    for i in 0..16 {
        let t = i as f64 * 0.37;
        assert_points_close(ellipse.eval(t), ellipse.eval(t + TAU), 1e-9);
    }
}

#[test]
fn test_point_moves_along_path_over_time() {
    let ellipse = flat(1.0, 1.0);
    let frames: Vec<Point3> = (0..60)
        .map(|frame| ellipse.eval(frame as f64 / 60.0 * TAU))
        .collect();
    for p in &frames {
        let on_curve = (p.x / 2.0).powi(2) + p.y.powi(2);
        assert_relative_eq!(on_curve, 1.0, max_relative = 1e-12);
    }
    assert_ne!(frames[0], frames[1]);
}

#[test]
fn test_curve_trait_object() {
    let curves: Vec<Box<dyn Curve>> = vec![
        Box::new(Ellipse::default()),
        Box::new(flat(2.0, 0.0)),
    ];
    for curve in &curves {
        assert!(curve.is_closed());
        assert_eq!(curve.domain(), (0.0, TAU));
    }
}

proptest! {
    #[test]
    fn prop_cardinal_points(r in -100.0f64..100.0, e in -100.0f64..100.0) {
        let ellipse = flat(r, e);
        let major = r + e;

        let p0 = ellipse.eval(0.0);
        prop_assert_eq!(p0, dvec3(major, 0.0, 0.0));

        let p1 = ellipse.eval(FRAC_PI_2);
        prop_assert!((p1.x).abs() <= 1e-12 * major.abs().max(1.0));
        prop_assert!((p1.y - r).abs() <= 1e-12 * r.abs().max(1.0));
        prop_assert_eq!(p1.z, 0.0);
    }

    #[test]
    fn prop_offset_composes_additively(
        t in -1000.0f64..1000.0,
        offset in -1000.0f64..1000.0,
        r in 0.0f64..50.0,
        e in 0.0f64..50.0,
    ) {
        let ellipse = flat(r, e);
        let a = ellipse.eval_with_offset(t, offset);
        let b = ellipse.eval_with_offset(t + offset, 0.0);
        prop_assert!((a - b).length() <= 1e-9);
        prop_assert_eq!(ellipse.eval(t), ellipse.eval_with_offset(t, 0.0));
    }

    #[test]
    fn prop_z_is_flat(t in proptest::num::f64::ANY, r in -10.0f64..10.0, e in -10.0f64..10.0) {
        prop_assert_eq!(Ellipse::default().eval(t).z, 0.0);
        prop_assert_eq!(flat(r, e).eval(t).z, 0.0);
    }

    #[test]
    fn prop_axes_independent_of_orientation(
        r in -1e6f64..1e6,
        e in -1e6f64..1e6,
        centre in proptest::array::uniform3(-1e3f64..1e3),
        tangent in proptest::array::uniform3(-1.0f64..1.0),
        normal in proptest::array::uniform3(-1.0f64..1.0),
        t in -10.0f64..10.0,
    ) {
        let [cx, cy, cz] = centre;
        let [tx, ty, tz] = tangent;
        let [nx, ny, nz] = normal;
        let ellipse = Ellipse::new(r, e, cx, cy, cz, tx, ty, tz, nx, ny, nz);

        prop_assert_eq!(ellipse.major().to_bits(), (r + e).to_bits());
        prop_assert_eq!(ellipse.minor().to_bits(), r.to_bits());
        prop_assert_eq!(ellipse.centre(), dvec3(cx, cy, cz));
        prop_assert_eq!(ellipse.tangent(), dvec3(tx, ty, tz));
        prop_assert_eq!(ellipse.normal(), dvec3(nx, ny, nz));

        // Orientation is stored only; evaluation matches the unoriented ellipse.
        prop_assert_eq!(ellipse.eval(t), flat(r, e).eval(t));
    }

    #[test]
    fn prop_ragged_setter_pads_with_zero(
        components in proptest::collection::vec(-1e3f64..1e3, 1..6),
    ) {
        let mut ellipse = Ellipse::default();
        ellipse.set_tangent_from(&components);
        let expected = [
            components[0],
            components.get(1).copied().unwrap_or(0.0),
            components.get(2).copied().unwrap_or(0.0),
        ];
        prop_assert_eq!(ellipse.tangent().to_array(), expected);
    }
}
