//! Curve trait and implementations.

mod ellipse;
mod profile;

use ovum_math::{Point3, Vector3};

pub use ellipse::Ellipse;
pub use profile::Profile;

/// Trait for parametric curves in 3D space.
pub trait Curve: Send + Sync {
    /// Evaluate the curve at parameter `t`.
    fn point_at(&self, t: f64) -> Point3;

    /// Evaluate the derivative with respect to `t`.
    fn tangent_at(&self, t: f64) -> Vector3;

    /// Return the parameter domain `(t_min, t_max)`.
    fn domain(&self) -> (f64, f64);

    /// Whether the curve is closed (start == end).
    fn is_closed(&self) -> bool {
        false
    }
}
