//! Discretising curves into point sequences.

use ovum_math::Point3;

use crate::curve::Curve;

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Evaluate `count` points evenly spaced over one traversal of the curve's
/// domain, starting at parameter `start + offset`.
///
/// This is the sampling an animation loop does when it wants a trail of
/// positions behind a moving point. The end of the domain is not repeated.
pub fn sample(curve: &dyn Curve, start: f64, offset: f64, count: usize) -> Vec<Point3> {
    let (t_min, t_max) = curve.domain();
    let step = (t_max - t_min) / count as f64;
    let t0 = start + offset;
    (0..count)
        .map(|i| curve.point_at(t0 + step * i as f64))
        .collect()
}

/// Convert a curve to a polyline using adaptive subdivision.
///
/// Segments are split at their parameter midpoint while the curve point
/// there deviates from the chord midpoint by more than `tolerance`.
pub fn curve_to_polyline(curve: &dyn Curve, tolerance: f64) -> Vec<Point3> {
    let (t_min, t_max) = curve.domain();
    let mut points = vec![curve.point_at(t_min)];
    if curve.is_closed() {
        // The chord of a closed curve over its full domain is a single point,
        // so split once up front to give the deviation test something to measure.
        let t_mid = (t_min + t_max) * 0.5;
        subdivide_curve(curve, t_min, t_mid, tolerance, &mut points, 1);
        subdivide_curve(curve, t_mid, t_max, tolerance, &mut points, 1);
    } else {
        subdivide_curve(curve, t_min, t_max, tolerance, &mut points, 0);
    }
    tracing::trace!(points = points.len(), tolerance, "tessellated curve");
    points
}

fn subdivide_curve(
    curve: &dyn Curve,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<Point3>,
    depth: u32,
) {
    let p1 = curve.point_at(t1);
    if depth >= MAX_DEPTH {
        points.push(p1);
        return;
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.point_at(t0);
    let chord_mid = (p0 + p1) * 0.5;
    let deviation = (curve.point_at(t_mid) - chord_mid).length();

    if deviation > tolerance {
        subdivide_curve(curve, t0, t_mid, tolerance, points, depth + 1);
        subdivide_curve(curve, t_mid, t1, tolerance, points, depth + 1);
    } else {
        points.push(p1);
    }
}
