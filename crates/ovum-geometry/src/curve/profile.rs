//! Unoriented coordinate functions of an ellipse.

use ovum_math::{dvec3, Point3, Vector3};

/// The coordinate mapping `t -> (x(t), y(t), z(t))` an ellipse evaluates.
///
/// A profile is a snapshot: the axis lengths are copied in when it is bound
/// and later changes to an ellipse's `major`/`minor` fields do not reach it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Profile {
    /// `(cos t, sin t, 0)`.
    Unit,
    /// `(major * cos t, minor * sin t, 0)`.
    Axes { major: f64, minor: f64 },
}

impl Profile {
    pub fn x(&self, t: f64) -> f64 {
        match *self {
            Profile::Unit => t.cos(),
            Profile::Axes { major, .. } => major * t.cos(),
        }
    }

    pub fn y(&self, t: f64) -> f64 {
        match *self {
            Profile::Unit => t.sin(),
            Profile::Axes { minor, .. } => minor * t.sin(),
        }
    }

    /// Always zero: the profile lies in the local XY plane.
    pub fn z(&self, _t: f64) -> f64 {
        0.0
    }

    pub fn point(&self, t: f64) -> Point3 {
        dvec3(self.x(t), self.y(t), self.z(t))
    }

    /// Derivative of [`Profile::point`].
    pub fn derivative(&self, t: f64) -> Vector3 {
        let (a, b) = self.semi_axes();
        dvec3(-a * t.sin(), b * t.cos(), 0.0)
    }

    /// Scale factors applied to `cos t` and `sin t`.
    pub fn semi_axes(&self) -> (f64, f64) {
        match *self {
            Profile::Unit => (1.0, 1.0),
            Profile::Axes { major, minor } => (major, minor),
        }
    }
}
