use crate::{Point3, Vector3};

/// A plane in 3D space defined by a point and a unit normal.
///
/// The side the normal points to is the front side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Point3,
    pub normal: Vector3,
}

impl Plane {
    /// Returns `None` when `normal` cannot be normalized (zero length or non-finite).
    pub fn new(origin: Point3, normal: Vector3) -> Option<Self> {
        let normal = normal.try_normalize()?;
        Some(Self { origin, normal })
    }

    /// Signed distance from a point to this plane; positive in front.
    pub fn signed_distance(&self, point: Point3) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    pub fn is_in_front(&self, point: Point3) -> bool {
        self.signed_distance(point) > 0.0
    }
}
